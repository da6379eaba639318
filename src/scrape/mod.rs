// src/scrape/mod.rs
mod fetch;
mod session;
mod worksheet;

pub use fetch::{RawDeliveryData, fetch_data, fetch_report, fetch_report_with};
pub use session::{SessionContext, bootstrap};
pub use worksheet::{RawWorksheetResponse, fetch as fetch_worksheet};
