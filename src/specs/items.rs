// src/specs/items.rs
//! Order contents table: one item description per row, first column.
use super::table::{self, RowMapper, cell};
use crate::dataset::DatasetKind;
use crate::error::RowError;

pub type ItemEntry = String;

pub struct ItemRows;

impl RowMapper for ItemRows {
    type Record = ItemEntry;
    const DATASET: DatasetKind = DatasetKind::Items;

    fn map_row(cells: &[String]) -> Result<ItemEntry, RowError> {
        cell(cells, 0, Self::DATASET)
    }
}

pub fn extract(raw_html: Option<&str>) -> Vec<ItemEntry> {
    table::extract::<ItemRows>(raw_html)
}
