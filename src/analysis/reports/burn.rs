//! Burn history and burn summary report formatters

use super::utils::{card_line, export_json, render_table};
use super::OutputFormat;
use crate::analysis::burn_calculator::for_table_display;
use crate::analysis::burn_summary::BurnSummary;
use crate::analysis::table::{burn_table, SortableTable};
use crate::errors::AppResult;
use crate::types::burn_history::DerivedBurnPoint;
use crate::types::visualisation::{
    PlotlyChart, PlotlyLayout, PlotlyTrace, BURN_COLOUR, SUPPLY_COLOUR,
};
use crate::utils::currency::{
    format_lava, format_lava_millions, format_lava_with_symbol, format_percentage,
};
use crate::utils::time::{format_date, format_full_date};

/// Lower bound of the supply axis so the burned slice stays visible
pub const SUPPLY_AXIS_FLOOR: f64 = 983_000_000.0;

const CARD_LABEL_WIDTH: usize = 26;

/// Format a derived burn series (ascending block order)
///
/// Console output is the reverse-chronological table; JSON is the series
/// itself; Plotly is the stacked supply/burned bar chart.
pub fn format_burn_history(
    points: &[DerivedBurnPoint],
    format: &OutputFormat,
) -> AppResult<String> {
    match format {
        OutputFormat::Console => {
            let mut output = String::new();
            output.push_str("=== LAVA BURN HISTORY ===\n\n");
            if points.is_empty() {
                output.push_str("No burn history records.\n");
                return Ok(output);
            }
            output.push_str(&render_table(&burn_table(&for_table_display(points))));
            Ok(output)
        }
        OutputFormat::Json => export_json(&points),
        OutputFormat::Plotly => export_json(&burn_history_chart(points)),
    }
}

/// Format a sorted burn table
pub fn format_burn_table(table: &SortableTable, format: &OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Console => {
            let mut output = String::new();
            match (table.state.active_column, table.state.direction) {
                (Some(column), Some(direction)) => output.push_str(&format!(
                    "Sorted by {} ({:?})\n\n",
                    table.headers.get(column).map(String::as_str).unwrap_or("?"),
                    direction
                )),
                _ => output.push_str("Unsorted\n\n"),
            }
            output.push_str(&render_table(table));
            Ok(output)
        }
        OutputFormat::Json | OutputFormat::Plotly => export_json(table),
    }
}

/// Stacked bar chart of remaining supply and cumulative burn
pub fn burn_history_chart(points: &[DerivedBurnPoint]) -> PlotlyChart {
    let x_values: Vec<String> = points.iter().map(|p| p.date.clone()).collect();
    let tick_labels: Vec<String> = x_values.iter().map(|d| format_date(d)).collect();
    let initial_supply = points.iter().map(|p| p.amount).fold(0.0, f64::max);

    let supply_hover: Vec<String> = points
        .iter()
        .map(|p| {
            format!(
                "{}<br>Remaining: {} LAVA<br>Block: {}",
                format_full_date(&p.date),
                format_lava(p.amount),
                p.height
            )
        })
        .collect();
    let burn_hover: Vec<String> = points
        .iter()
        .map(|p| {
            let mut text = format!(
                "{}<br>Total Burned: {} LAVA<br>Burn Rate: {}",
                format_full_date(&p.date),
                format_lava(p.cumulative_burn),
                format_percentage(p.burn_rate)
            );
            if p.diff > 0.0 {
                text.push_str(&format!("<br>Daily Burn: {} LAVA", format_lava(p.diff)));
            }
            text
        })
        .collect();

    let supply_trace = PlotlyTrace::bar(
        x_values.clone(),
        points.iter().map(|p| p.amount).collect(),
        "Remaining Supply",
        SUPPLY_COLOUR,
    )
    .with_hover_text(supply_hover);
    let burn_trace = PlotlyTrace::bar(
        x_values.clone(),
        points.iter().map(|p| p.cumulative_burn).collect(),
        "Burned Amount",
        BURN_COLOUR,
    )
    .with_hover_text(burn_hover);

    let mut layout = PlotlyLayout::basic("LAVA Burn History", "Date", "LAVA Supply")
        .with_barmode("stack")
        .with_legend("h", 0.0, 1.1, "left");
    layout.xaxis.set_tick_labels(x_values, tick_labels);
    layout.xaxis.tickangle = Some(-45);
    if initial_supply > SUPPLY_AXIS_FLOOR {
        layout.yaxis.range = Some(vec![SUPPLY_AXIS_FLOOR, initial_supply]);
    }

    PlotlyChart {
        data: vec![supply_trace, burn_trace],
        layout,
    }
}

/// Format the burn summary cards
pub fn format_burn_summary(summary: &BurnSummary, format: &OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Console => {
            let mut output = String::new();
            output.push_str("=== LAVA BURN SUMMARY ===\n\n");
            if summary.record_count == 0 {
                output.push_str("No burn history records.\n");
                return Ok(output);
            }

            let w = CARD_LABEL_WIDTH;
            if let (Some(first), Some(latest)) = (&summary.first_date, &summary.latest) {
                output.push_str(&card_line(
                    "Period",
                    &format!("{} to {}", format_date(first), format_date(&latest.date)),
                    w,
                ));
            }
            output.push_str(&card_line("Records", &summary.record_count.to_string(), w));
            output.push_str(&card_line(
                "Initial Supply",
                &format!(
                    "{} LAVA ({})",
                    format_lava(summary.initial_supply),
                    format_lava_millions(summary.initial_supply)
                ),
                w,
            ));
            output.push_str(&card_line(
                "Current Supply",
                &format!(
                    "{} LAVA ({})",
                    format_lava(summary.current_supply),
                    format_lava_millions(summary.current_supply)
                ),
                w,
            ));
            output.push_str(&card_line(
                "Total Burned",
                &format_lava_with_symbol(summary.total_burned),
                w,
            ));
            output.push_str(&card_line(
                "Burn Percentage",
                &format_percentage(summary.burn_percentage),
                w,
            ));
            output.push_str(&card_line("Burn Days", &summary.burn_days.to_string(), w));
            output.push_str(&card_line(
                "Average Burn per Burn Day",
                &format_lava_with_symbol(summary.average_burn_per_burn_day),
                w,
            ));
            if let Some(days) = summary.elapsed_days {
                output.push_str(&card_line("Elapsed Days", &days.to_string(), w));
            }
            output.push_str(&card_line(
                "Annualised Burn",
                &format_lava_with_symbol(summary.annualised_burn),
                w,
            ));

            if let Some(latest) = &summary.latest {
                output.push_str(&format!(
                    "\nLatest: {} at block {}, {} LAVA remaining\n",
                    format_full_date(&latest.date),
                    latest.height,
                    format_lava(latest.amount)
                ));
            }

            if let Some(last) = summary.moving_average.last() {
                output.push_str(&format!(
                    "{}-record moving average burn: {} LAVA\n",
                    summary.moving_average_window,
                    format_lava(last.average)
                ));
            }
            Ok(output)
        }
        OutputFormat::Json => export_json(summary),
        OutputFormat::Plotly => export_json(&summary.to_plotly_chart()),
    }
}
