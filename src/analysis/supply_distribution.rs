//! Supply distribution analysis
//!
//! Splits the total supply into circulating, burned and locked slices. The
//! burned share comes from the burn series; total and circulating come from a
//! [`SupplySnapshot`], which may be last-known fallback values.

use crate::types::supply::{SupplyDistribution, SupplySnapshot, SupplySource};
use crate::types::visualisation::{
    PlotlyPieChart, PlotlyPieLayout, PlotlyPieTrace, BURN_COLOUR, LOCKED_COLOUR, SUPPLY_COLOUR,
};
use crate::utils::currency::format_millions_label;
use crate::utils::math::safe_percentage;

/// Last-known total supply, used when the backend is unreachable
pub const FALLBACK_TOTAL_SUPPLY: f64 = 985_088_593.0;
/// Last-known circulating supply, used when the backend is unreachable
pub const FALLBACK_CIRCULATING_SUPPLY: f64 = 277_075_327.0;

impl SupplySnapshot {
    pub fn live(total_supply: f64, circulating_supply: f64) -> Self {
        Self {
            total_supply,
            circulating_supply,
            source: SupplySource::Live,
        }
    }

    pub fn fallback() -> Self {
        Self {
            total_supply: FALLBACK_TOTAL_SUPPLY,
            circulating_supply: FALLBACK_CIRCULATING_SUPPLY,
            source: SupplySource::Fallback,
        }
    }
}

impl SupplyDistribution {
    /// Compute the distribution for a total, circulating amount and burn percentage
    ///
    /// Locked supply is whatever is neither burned nor circulating. All
    /// percentages are of `total_supply` and are 0 when it is 0.
    ///
    /// ```
    /// use lava_burn_stats::types::SupplyDistribution;
    ///
    /// let d = SupplyDistribution::compute(1000.0, 300.0, 10.0);
    /// assert_eq!(d.burned_amount, 100.0);
    /// assert_eq!(d.locked_supply, 600.0);
    /// assert!((d.locked_percentage - 60.0).abs() < 1e-9);
    /// ```
    pub fn compute(total_supply: f64, circulating_supply: f64, burned_percentage: f64) -> Self {
        let burned_amount = total_supply * burned_percentage / 100.0;
        let locked_supply = total_supply - burned_amount - circulating_supply;

        Self {
            total_supply,
            circulating_supply,
            burned_amount,
            locked_supply,
            circulating_percentage: safe_percentage(circulating_supply, total_supply),
            burned_percentage: safe_percentage(burned_amount, total_supply),
            locked_percentage: safe_percentage(locked_supply, total_supply),
        }
    }

    pub fn from_snapshot(snapshot: &SupplySnapshot, burned_percentage: f64) -> Self {
        Self::compute(
            snapshot.total_supply,
            snapshot.circulating_supply,
            burned_percentage,
        )
    }

    /// Labelled slices in display order: circulating, burned, locked
    pub fn slices(&self) -> Vec<(String, f64)> {
        vec![
            (
                format!("Circulating Supply ({:.2}%)", self.circulating_percentage),
                self.circulating_supply,
            ),
            (
                format!("Burned Supply ({:.2}%)", self.burned_percentage),
                self.burned_amount,
            ),
            (
                format!("Locked Supply ({:.2}%)", self.locked_percentage),
                self.locked_supply,
            ),
        ]
    }

    /// Generate a Plotly pie chart of the three slices
    pub fn to_plotly_chart(&self) -> PlotlyPieChart {
        let colours = [BURN_COLOUR, SUPPLY_COLOUR, LOCKED_COLOUR];
        let slices: Vec<(String, f64, &str)> = self
            .slices()
            .into_iter()
            .zip(colours)
            .map(|((label, value), colour)| (label, value, colour))
            .collect();
        let hover: Vec<String> = slices
            .iter()
            .map(|(_, value, _)| format_millions_label(*value))
            .collect();

        PlotlyPieChart {
            data: vec![PlotlyPieTrace::from_slices(&slices).with_hover_text(hover)],
            layout: PlotlyPieLayout::titled("LAVA Supply Distribution"),
        }
    }
}
