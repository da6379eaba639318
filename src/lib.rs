// src/lib.rs

#[macro_use]
pub mod macros;
pub mod log;

pub mod config;
pub mod core;
pub mod dataset;
pub mod error;
pub mod progress;
pub mod render;
pub mod report;
pub mod scrape;
pub mod specs;

#[cfg(feature = "cli")]
pub mod cli;

pub use dataset::DatasetKind;
pub use report::{DeliveryReport, DeliveryReporter, KaspiReport};
pub use scrape::{fetch_data, fetch_report, fetch_report_with};
