//! Sortable display tables
//!
//! Rows are rendered cell text. Clicking a header cycles that column through
//! ascending, descending and unsorted; clicking a different column starts it
//! at ascending. Unsorting clears the active column and leaves the rows in
//! whatever order the last sort produced.

use crate::types::burn_history::DerivedBurnPoint;
use crate::utils::currency::{format_lava_with_symbol, format_percentage};
use crate::utils::number::{group_thousands, parse_leading_number};
use crate::utils::time::format_full_date;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Column whose values order the date column
const DATE_SORT_COLUMN: usize = 1;

/// Burn table headers, in display order
pub const BURN_TABLE_HEADERS: [&str; 6] = [
    "Date",
    "Block",
    "Supply",
    "Burned",
    "Burn Rate",
    "Burn Rate Change",
];

/// Direction of an active column sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Per-table sort state: at most one active column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub active_column: Option<usize>,
    pub direction: Option<SortDirection>,
}

impl SortState {
    /// Apply a header click and return the resulting direction
    pub fn click(&mut self, column: usize) -> Option<SortDirection> {
        let next = if self.active_column != Some(column) {
            Some(SortDirection::Asc)
        } else {
            match self.direction {
                None => Some(SortDirection::Asc),
                Some(SortDirection::Asc) => Some(SortDirection::Desc),
                Some(SortDirection::Desc) => None,
            }
        };

        self.direction = next;
        self.active_column = next.map(|_| column);
        next
    }
}

/// A table of rendered rows with header-click sorting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortableTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub state: SortState,
}

impl SortableTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            headers,
            rows,
            state: SortState::default(),
        }
    }

    /// Click a column header, re-sorting rows unless the column became unsorted
    pub fn click(&mut self, column: usize) -> Option<SortDirection> {
        let direction = self.state.click(column);
        if let Some(direction) = direction {
            sort_rows(&mut self.rows, column, direction);
        }
        direction
    }
}

/// Stable sort of rendered rows by one column
pub fn sort_rows(rows: &mut [Vec<String>], column: usize, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ordering = compare_rows(a, b, column);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

fn cell(row: &[String], column: usize) -> &str {
    row.get(column).map(|s| s.trim()).unwrap_or("")
}

/// Ascending comparison of two rows on `column`
///
/// The date column compares by block height. Other columns compare by their
/// leading number; cells without one sort after numeric cells and compare
/// with each other as text, keeping the ordering total.
pub fn compare_rows(a: &[String], b: &[String], column: usize) -> Ordering {
    if column == 0 {
        let a_block = parse_leading_number(cell(a, DATE_SORT_COLUMN)).unwrap_or(0.0);
        let b_block = parse_leading_number(cell(b, DATE_SORT_COLUMN)).unwrap_or(0.0);
        return a_block.total_cmp(&b_block);
    }

    let (a_text, b_text) = (cell(a, column), cell(b, column));
    match (parse_leading_number(a_text), parse_leading_number(b_text)) {
        (Some(a_num), Some(b_num)) => a_num.total_cmp(&b_num),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a_text.cmp(b_text),
    }
}

/// Render one derived point as a burn table row
pub fn burn_table_row(point: &DerivedBurnPoint) -> Vec<String> {
    let burned = if point.diff > 0.0 {
        format_lava_with_symbol(point.diff)
    } else {
        "-".to_string()
    };

    vec![
        format_full_date(&point.date),
        group_thousands(&point.height.to_string()),
        format_lava_with_symbol(point.amount),
        burned,
        format_percentage(point.burn_rate),
        format_percentage(point.burn_rate_change),
    ]
}

/// Burn table over points already in display order
pub fn burn_table(points: &[DerivedBurnPoint]) -> SortableTable {
    SortableTable::new(
        BURN_TABLE_HEADERS.iter().map(|h| h.to_string()).collect(),
        points.iter().map(burn_table_row).collect(),
    )
}
