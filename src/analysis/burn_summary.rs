//! Burn summary statistics
//!
//! Headline figures derived from a burn series:
//!
//! - **Supply**: initial (maximum) and current supply
//! - **Burn totals**: total burned, burn percentage and burn days
//! - **Pace**: average burn per burn day and an annualised projection
//! - **Smoothing**: trailing moving average of per-record burn
//!
//! ## Output Formats
//!
//! - **Console**: Card-style summary
//! - **JSON**: The full [`BurnSummary`]
//! - **Plotly**: Daily burn bars with the moving average overlaid

use crate::types::burn_history::DerivedBurnPoint;
use crate::types::visualisation::{
    PlotlyAnnotation, PlotlyChart, PlotlyLayout, PlotlyTrace, AVERAGE_COLOUR, BURN_COLOUR,
};
use crate::utils::currency::{format_lava, format_percentage};
use crate::utils::math::moving_average;
use crate::utils::time::{days_between, format_date, format_full_date};
use serde::{Deserialize, Serialize};

/// Default trailing window for burn smoothing
pub const DEFAULT_MOVING_AVERAGE_WINDOW: usize = 7;

const DAYS_PER_YEAR: f64 = 365.0;

/// One point of the smoothed burn series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovingAveragePoint {
    pub date: String,
    pub height: u64,
    pub burned: f64,
    pub average: f64,
}

/// Summary figures for a burn series
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BurnSummary {
    pub record_count: usize,
    pub initial_supply: f64,
    pub current_supply: f64,
    pub total_burned: f64,
    /// Total burned as a percentage of the initial supply
    pub burn_percentage: f64,
    /// Records with a strictly positive burn
    pub burn_days: usize,
    pub average_burn_per_burn_day: f64,
    /// Calendar days between the first and last record, when both dates parse
    pub elapsed_days: Option<i64>,
    pub annualised_burn: f64,
    pub first_date: Option<String>,
    pub latest: Option<DerivedBurnPoint>,
    pub moving_average_window: usize,
    pub moving_average: Vec<MovingAveragePoint>,
}

impl BurnSummary {
    /// Summarise a derived burn series in ascending block order
    pub fn from_points(points: &[DerivedBurnPoint], window: usize) -> Self {
        let window = window.max(1);
        let (first, latest) = match (points.first(), points.last()) {
            (Some(first), Some(latest)) => (first, latest),
            _ => {
                return Self {
                    moving_average_window: window,
                    ..Self::default()
                }
            }
        };

        let initial_supply = points.iter().map(|p| p.amount).fold(0.0, f64::max);
        let burn_days = points.iter().filter(|p| p.diff > 0.0).count();
        let total_burned = latest.cumulative_burn;
        let average_burn_per_burn_day = if burn_days > 0 {
            total_burned / burn_days as f64
        } else {
            0.0
        };

        let elapsed_days = days_between(&first.date, &latest.date);
        let annualised_burn = match elapsed_days {
            Some(days) if days > 0 => total_burned / days as f64 * DAYS_PER_YEAR,
            _ => 0.0,
        };

        let burned: Vec<f64> = points.iter().map(|p| p.diff).collect();
        let moving_average = points
            .iter()
            .zip(moving_average(&burned, window))
            .map(|(point, average)| MovingAveragePoint {
                date: point.date.clone(),
                height: point.height,
                burned: point.diff,
                average,
            })
            .collect();

        Self {
            record_count: points.len(),
            initial_supply,
            current_supply: latest.amount,
            total_burned,
            burn_percentage: latest.burn_rate,
            burn_days,
            average_burn_per_burn_day,
            elapsed_days,
            annualised_burn,
            first_date: Some(first.date.clone()),
            latest: Some(latest.clone()),
            moving_average_window: window,
            moving_average,
        }
    }

    /// Generate Plotly chart from this summary
    ///
    /// Per-record burn as bars with the trailing average as a line.
    pub fn to_plotly_chart(&self) -> PlotlyChart {
        let x_values: Vec<String> = self.moving_average.iter().map(|p| p.date.clone()).collect();
        let tick_labels: Vec<String> = x_values.iter().map(|d| format_date(d)).collect();
        let burned: Vec<f64> = self.moving_average.iter().map(|p| p.burned).collect();
        let averages: Vec<f64> = self.moving_average.iter().map(|p| p.average).collect();
        let hover: Vec<String> = self
            .moving_average
            .iter()
            .map(|p| {
                format!(
                    "{}<br>Block: {}<br>Burned: {} LAVA<br>{}-record average: {} LAVA",
                    format_full_date(&p.date),
                    p.height,
                    format_lava(p.burned),
                    self.moving_average_window,
                    format_lava(p.average)
                )
            })
            .collect();

        let burn_trace = PlotlyTrace::bar(x_values.clone(), burned, "Burned", BURN_COLOUR)
            .with_hover_text(hover);
        let average_trace = PlotlyTrace::line(
            x_values.clone(),
            averages,
            &format!("{}-record Moving Average", self.moving_average_window),
            AVERAGE_COLOUR,
        );

        let stats_text = format!(
            "Total Burned: {} LAVA<br>Burn: {}<br>Avg per Burn Day: {} LAVA",
            format_lava(self.total_burned),
            format_percentage(self.burn_percentage),
            format_lava(self.average_burn_per_burn_day)
        );

        let mut layout = PlotlyLayout::basic("LAVA Daily Burn", "Date", "LAVA Burned")
            .with_legend("h", 0.0, 1.1, "left")
            .with_annotations(vec![PlotlyAnnotation::stats_box(&stats_text, 0.02, 0.8)]);
        layout.xaxis.set_tick_labels(x_values, tick_labels);
        layout.xaxis.tickangle = Some(-45);

        PlotlyChart {
            data: vec![burn_trace, average_trace],
            layout,
        }
    }
}
