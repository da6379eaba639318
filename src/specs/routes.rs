// src/specs/routes.rs
//! Route assignment table.
//!
//! Columns: route, task, description, courier, created at. The record keeps
//! its own field order; mapping is by position.
use serde::Serialize;

use super::table::{self, RowMapper, cell};
use crate::dataset::DatasetKind;
use crate::error::RowError;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub route: String,
    pub task: String,
    pub description: String,
    pub courier: String,
    pub created_at: String,
}

pub struct RouteRows;

impl RowMapper for RouteRows {
    type Record = RouteEntry;
    const DATASET: DatasetKind = DatasetKind::Routes;

    fn map_row(cells: &[String]) -> Result<RouteEntry, RowError> {
        Ok(RouteEntry {
            created_at: cell(cells, 4, Self::DATASET)?,
            description: cell(cells, 2, Self::DATASET)?,
            task: cell(cells, 1, Self::DATASET)?,
            courier: cell(cells, 3, Self::DATASET)?,
            route: cell(cells, 0, Self::DATASET)?,
        })
    }
}

pub fn extract(raw_html: Option<&str>) -> Vec<RouteEntry> {
    table::extract::<RouteRows>(raw_html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_map_by_position() {
        let html = format!(
            r#"<table id="{}">
                 <tr><th>Маршрут</th><th>Задание</th><th>Описание</th><th>Курьер</th><th>Создано</th></tr>
                 <tr><td>ALA-01</td><td>T-77</td><td>Выдан курьеру</td><td>Асхат</td><td>12.01.2024 08:00</td></tr>
               </table>"#,
            DatasetKind::Routes.worksheet_id()
        );
        let rows = extract(Some(&html));
        assert_eq!(
            rows,
            vec![RouteEntry {
                route: s!("ALA-01"),
                task: s!("T-77"),
                description: s!("Выдан курьеру"),
                courier: s!("Асхат"),
                created_at: s!("12.01.2024 08:00"),
            }]
        );
    }

    #[test]
    fn four_cell_row_is_skipped() {
        let html = format!(
            r#"<table id="{}"><tr><td>ALA-01</td><td>T-77</td><td>x</td><td>y</td></tr></table>"#,
            DatasetKind::Routes.worksheet_id()
        );
        assert!(extract(Some(&html)).is_empty());
    }

    #[test]
    fn other_worksheet_in_fragment_is_ignored() {
        let html = format!(
            r#"<table id="{}"><tr><td>1</td><td>2</td><td>3</td><td>4</td><td>5</td></tr></table>"#,
            DatasetKind::Progress.worksheet_id()
        );
        assert!(extract(Some(&html)).is_empty());
    }
}
