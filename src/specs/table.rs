// src/specs/table.rs
use std::time::Instant;

use crate::core::html::table_rows;
use crate::dataset::DatasetKind;
use crate::error::RowError;

/// Column layout of one worksheet table.
pub trait RowMapper {
    type Record;
    const DATASET: DatasetKind;

    /// Map the `<td>` texts of one data row. Only called with at least one cell.
    fn map_row(cells: &[String]) -> Result<Self::Record, RowError>;
}

/// Records from a worksheet fragment, in row order.
///
/// Absent or blank fragments give an empty vec. Rows without `<td>` cells
/// (headers, separators) are skipped silently; rows that do not fit the
/// layout are logged and skipped.
pub fn extract<M: RowMapper>(raw_html: Option<&str>) -> Vec<M::Record> {
    let Some(html) = raw_html.filter(|h| !h.trim().is_empty()) else {
        return Vec::new();
    };

    let t = Instant::now();
    let mut out = Vec::new();
    for (i, cells) in table_rows(html, M::DATASET.worksheet_id()).into_iter().enumerate() {
        if cells.is_empty() {
            continue;
        }
        match M::map_row(&cells) {
            Ok(record) => out.push(record),
            Err(e) => logw!("Skipping {} row {i}: {e}", M::DATASET),
        }
    }
    logd!("{}: {} rows in {:?}", M::DATASET, out.len(), t.elapsed());
    out
}

/// Cell text at `index`, or a `RowError` naming what was missing.
pub(crate) fn cell(cells: &[String], index: usize, dataset: DatasetKind) -> Result<String, RowError> {
    cells.get(index).cloned().ok_or(RowError::MissingCell {
        dataset,
        index,
        found: cells.len(),
    })
}
