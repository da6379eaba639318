// src/specs/progress.rs
//! Status history table.
//!
//! Columns: created at, description, courier, city.
use serde::Serialize;

use super::table::{self, RowMapper, cell};
use crate::dataset::DatasetKind;
use crate::error::RowError;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProgressEntry {
    pub created_at: String,
    pub description: String,
    pub courier: String,
    pub city: String,
}

pub struct ProgressRows;

impl RowMapper for ProgressRows {
    type Record = ProgressEntry;
    const DATASET: DatasetKind = DatasetKind::Progress;

    fn map_row(cells: &[String]) -> Result<ProgressEntry, RowError> {
        Ok(ProgressEntry {
            created_at: cell(cells, 0, Self::DATASET)?,
            description: cell(cells, 1, Self::DATASET)?,
            courier: cell(cells, 2, Self::DATASET)?,
            city: cell(cells, 3, Self::DATASET)?,
        })
    }
}

pub fn extract(raw_html: Option<&str>) -> Vec<ProgressEntry> {
    table::extract::<ProgressRows>(raw_html)
}
