//! Burn, supply and rewards analysis
//!
//! The module is organised around the [`AnalysisEngine`], which owns a loaded
//! burn history and exposes every derivation built on it:
//!
//! - **Burn derivation** - cumulative burn, burn rate and burn-rate change
//! - **Table projection** - reverse-chronological rows and sortable tables
//! - **Summary** - headline figures and moving-average smoothing
//! - **Supply distribution** - circulating/burned/locked split
//! - **Report Generation** - Console, JSON and Plotly output
//!
//! ## Usage
//!
//! ```rust
//! use lava_burn_stats::analysis::AnalysisEngine;
//! use lava_burn_stats::errors::AppResult;
//! use lava_burn_stats::types::{BurnHistory, BurnHistoryRecord};
//!
//! fn example() -> AppResult<()> {
//!     let history = BurnHistory::from_records(vec![
//!         BurnHistoryRecord::new("2024-12-01", 1, 1000.0, Some(0.0)),
//!         BurnHistoryRecord::new("2024-12-02", 2, 990.0, Some(10.0)),
//!     ]);
//!     let engine = AnalysisEngine::new(history);
//!
//!     let points = engine.burn_points()?;
//!     assert_eq!(points[1].cumulative_burn, 10.0);
//!
//!     let summary = engine.summary(7)?;
//!     assert_eq!(summary.burn_days, 1);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod burn_calculator;
pub mod burn_summary;
pub mod reports;
pub mod rewards;
pub mod supply_distribution;
pub mod table;

// Re-export main types and interfaces
pub use burn_calculator::{calculate_burn_data, for_table_display};
pub use burn_summary::{BurnSummary, MovingAveragePoint, DEFAULT_MOVING_AVERAGE_WINDOW};
pub use reports::{OutputFormat, ReportFormatter};
pub use rewards::{aggregate_tokens, RewardsView};
pub use supply_distribution::{FALLBACK_CIRCULATING_SUPPLY, FALLBACK_TOTAL_SUPPLY};
pub use table::{SortDirection, SortState, SortableTable};

use crate::errors::AppResult;
use crate::types::burn_history::{BurnHistory, DerivedBurnPoint};
use crate::types::supply::{SupplyDistribution, SupplyReport, SupplySnapshot};
use std::path::Path;

/// Analysis engine over one burn history document
pub struct AnalysisEngine {
    history: BurnHistory,
}

impl AnalysisEngine {
    pub fn new(history: BurnHistory) -> Self {
        Self { history }
    }

    /// Load the burn history document at `path`
    pub fn from_file<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        Ok(Self::new(BurnHistory::from_file(path)?))
    }

    pub fn history(&self) -> &BurnHistory {
        &self.history
    }

    /// Derived burn series in ascending block order
    ///
    /// Flagged records are skipped; any other invalid record fails the whole
    /// derivation.
    pub fn burn_points(&self) -> AppResult<Vec<DerivedBurnPoint>> {
        calculate_burn_data(&self.history.usable_records())
    }

    /// Derived burn series newest first
    pub fn table_points(&self) -> AppResult<Vec<DerivedBurnPoint>> {
        Ok(for_table_display(&self.burn_points()?))
    }

    /// Sortable burn table, initially newest first and unsorted
    pub fn burn_table(&self) -> AppResult<SortableTable> {
        Ok(table::burn_table(&self.table_points()?))
    }

    pub fn summary(&self, window: usize) -> AppResult<BurnSummary> {
        Ok(BurnSummary::from_points(&self.burn_points()?, window))
    }

    /// Latest burn rate as a percentage of the initial supply, 0 with no history
    pub fn current_burn_percentage(&self) -> AppResult<f64> {
        Ok(self
            .burn_points()?
            .last()
            .map(|p| p.burn_rate)
            .unwrap_or(0.0))
    }

    /// Supply distribution for a snapshot, using this history's burn percentage
    pub fn supply_report(&self, snapshot: SupplySnapshot) -> AppResult<SupplyReport> {
        let burned_percentage = self.current_burn_percentage()?;
        Ok(SupplyReport {
            distribution: SupplyDistribution::from_snapshot(&snapshot, burned_percentage),
            snapshot,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::burn_history::BurnHistoryRecord;

    fn engine() -> AnalysisEngine {
        let mut pruned = BurnHistoryRecord::new("2024-12-02", 2, 0.0, None);
        pruned.supply = None;
        pruned.error = Some("pruned".to_string());

        AnalysisEngine::new(BurnHistory::from_records(vec![
            BurnHistoryRecord::new("2024-12-03", 3, 985.0, Some(5.0)),
            pruned,
            BurnHistoryRecord::new("2024-12-01", 1, 1000.0, Some(0.0)),
            BurnHistoryRecord::new("2024-12-04", 4, 975.0, Some(10.0)),
        ]))
    }

    #[test]
    fn test_flagged_records_are_skipped() {
        let points = engine().burn_points().unwrap();
        assert_eq!(points.len(), 3);
        let heights: Vec<u64> = points.iter().map(|p| p.height).collect();
        assert_eq!(heights, vec![1, 3, 4]);
        assert_eq!(points[2].cumulative_burn, 15.0);
    }

    #[test]
    fn test_table_points_newest_first() {
        let points = engine().table_points().unwrap();
        assert_eq!(points[0].height, 4);
        assert_eq!(points[2].height, 1);
    }

    #[test]
    fn test_burn_table_rows() {
        let table = engine().burn_table().unwrap();
        assert_eq!(table.headers.len(), 6);
        assert_eq!(table.rows[0][0], "December 4, 2024");
        assert_eq!(table.state, SortState::default());
    }

    #[test]
    fn test_supply_report_uses_latest_burn_rate() {
        let report = engine()
            .supply_report(SupplySnapshot::live(2000.0, 500.0))
            .unwrap();
        assert!((report.distribution.burned_percentage - 1.5).abs() < 1e-9);
        assert!((report.distribution.burned_amount - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_history() {
        let engine = AnalysisEngine::new(BurnHistory::default());
        assert!(engine.burn_points().unwrap().is_empty());
        assert_eq!(engine.current_burn_percentage().unwrap(), 0.0);
    }
}
