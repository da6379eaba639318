// src/specs/mod.rs
//! # Portal “specs” module
//!
//! Page- and fragment-specific knowledge of the Kaspi tracking portal.
//! Each spec encodes *where the ground truth lives in the markup* and *how
//! to read it*. Nothing here touches the network.
//!
//! ## What lives here
//! - **Landing page** (`landing`): hidden session inputs, the `Set-Cookie`
//!   fold, and the plugin-id scan over the inline APEX init script.
//! - **Worksheet request** (`worksheet`): the fixed multipart fields and the
//!   `p_json` page-item payload for one dataset.
//! - **Worksheet tables** (`progress`, `routes`, `items`): fixed column
//!   layouts mapped onto typed records via `table::RowMapper`.
//!
//! ## What does **not** live here
//! - **HTTP** – `core::net` and the `scrape` layer own requests.
//! - **Memoization and aggregation** – `report::KaspiReport`.
//! - **Presentation** – `render` and the CLI.
//!
//! ## Typical call chain
//! ```text
//! scrape::fetch_data → scrape::session::bootstrap → specs::landing::parse_landing
//!                    ↘ scrape::worksheet::fetch   → specs::worksheet::WorksheetForm
//! report::KaspiReport::progress() → specs::progress::extract → specs::table::extract
//! ```
//!
//! ## Conventions & invariants
//! - Worksheet ids come from `DatasetKind::worksheet_id` only; bootstrap and
//!   extraction must agree on them.
//! - Elements are found by id attribute, never by position, except the
//!   plugin script, which the portal only identifies by order.
//! - Cell text is trimmed, nothing more. Column indices are fixed per table.
//! - Tolerant per row, strict per page: a bad row is skipped, a landing page
//!   without the plugin script is an error.
//!
//! ## Testing notes
//! Every spec is tested offline against inline markup samples.
pub mod items;
pub mod landing;
pub mod progress;
pub mod routes;
pub mod table;
pub mod worksheet;
