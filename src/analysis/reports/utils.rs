//! Utility functions for report formatting
//!
//! Shared helpers used across the report formatters.

use crate::analysis::table::SortableTable;
use crate::errors::AppResult;
use serde::Serialize;

/// Export data as JSON for programmatic use
pub fn export_json<T: Serialize>(data: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Render a table as aligned ` | `-separated text with a rule under the header
pub fn render_table(table: &SortableTable) -> String {
    let column_count = table
        .rows
        .iter()
        .map(Vec::len)
        .chain(std::iter::once(table.headers.len()))
        .max()
        .unwrap_or(0);

    let mut widths = vec![0usize; column_count];
    for row in std::iter::once(&table.headers).chain(table.rows.iter()) {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let render_row = |row: &[String]| -> String {
        let cells: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, width)| {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                format!("{:<width$}", cell, width = *width)
            })
            .collect();
        format!("{}\n", cells.join(" | ").trim_end())
    };

    let mut output = render_row(&table.headers);
    let rule_width = widths.iter().sum::<usize>() + 3 * column_count.saturating_sub(1);
    output.push_str(&format!("{}\n", "-".repeat(rule_width)));
    for row in &table.rows {
        output.push_str(&render_row(row));
    }
    output
}

/// Card-style `label: value` line with the label padded to `width`
pub fn card_line(label: &str, value: &str, width: usize) -> String {
    format!("{:<width$} {}\n", format!("{}:", label), value, width = width)
}
