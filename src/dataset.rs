// src/dataset.rs
use std::fmt;

use crate::config::consts::{ITEMS_WORKSHEET_ID, PROGRESS_WORKSHEET_ID, ROUTES_WORKSHEET_ID};

/// The three tables a tracking query can pull from the portal.
///
/// Each kind owns one worksheet id. The same id finds the plugin id in the
/// landing page script and the table element in the returned fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DatasetKind {
    Progress,
    Routes,
    Items,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 3] = [DatasetKind::Progress, DatasetKind::Routes, DatasetKind::Items];

    pub fn worksheet_id(self) -> &'static str {
        match self {
            DatasetKind::Progress => PROGRESS_WORKSHEET_ID,
            DatasetKind::Routes => ROUTES_WORKSHEET_ID,
            DatasetKind::Items => ITEMS_WORKSHEET_ID,
        }
    }

    pub fn from_worksheet_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.worksheet_id() == id)
    }

    pub fn name(self) -> &'static str {
        match self {
            DatasetKind::Progress => "progress",
            DatasetKind::Routes => "routes",
            DatasetKind::Items => "items",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
