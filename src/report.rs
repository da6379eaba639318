// src/report.rs
//! Typed view over one tracking query.
//!
//! `KaspiReport` owns the raw fragments and parses each table the first time
//! it is asked for, keeping the result for the life of the report.
use std::cell::OnceCell;

use serde::Serialize;

use crate::scrape::RawDeliveryData;
use crate::specs::{items, progress, routes};

pub use crate::specs::items::ItemEntry;
pub use crate::specs::progress::ProgressEntry;
pub use crate::specs::routes::RouteEntry;

/// All three tables of one order. Sequences are in table order, possibly empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DeliveryReport {
    pub progress: Vec<ProgressEntry>,
    pub routes: Vec<RouteEntry>,
    pub items: Vec<ItemEntry>,
}

impl DeliveryReport {
    /// No rows anywhere. Could be an unknown order or a failed fetch; the
    /// two are not told apart.
    pub fn is_empty(&self) -> bool {
        self.progress.is_empty() && self.routes.is_empty() && self.items.is_empty()
    }
}

/// What a delivery report can answer, whichever portal produced it.
pub trait DeliveryReporter {
    fn progress(&self) -> &[ProgressEntry];
    fn routes(&self) -> &[RouteEntry];
    fn items(&self) -> &[ItemEntry];

    fn full(&self) -> DeliveryReport {
        DeliveryReport {
            progress: self.progress().to_vec(),
            routes: self.routes().to_vec(),
            items: self.items().to_vec(),
        }
    }
}

/// Lazily parsed report over raw Kaspi worksheet fragments.
///
/// Not `Sync`: one report serves one consumer.
#[derive(Debug)]
pub struct KaspiReport {
    raw: RawDeliveryData,
    progress: OnceCell<Vec<ProgressEntry>>,
    routes: OnceCell<Vec<RouteEntry>>,
    items: OnceCell<Vec<ItemEntry>>,
}

impl KaspiReport {
    pub fn new(raw: RawDeliveryData) -> Self {
        Self {
            raw,
            progress: OnceCell::new(),
            routes: OnceCell::new(),
            items: OnceCell::new(),
        }
    }

    pub fn raw(&self) -> &RawDeliveryData {
        &self.raw
    }
}

impl DeliveryReporter for KaspiReport {
    fn progress(&self) -> &[ProgressEntry] {
        self.progress
            .get_or_init(|| progress::extract(self.raw.progress.html()))
    }

    fn routes(&self) -> &[RouteEntry] {
        self.routes
            .get_or_init(|| routes::extract(self.raw.routes.html()))
    }

    fn items(&self) -> &[ItemEntry] {
        self.items.get_or_init(|| items::extract(self.raw.items.html()))
    }
}
