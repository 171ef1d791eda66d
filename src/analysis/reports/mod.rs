//! Report formatting and output generation
//!
//! Provides formatting for burn, supply and rewards results via the
//! [`ReportFormatter`] facade. Supports Console, JSON, and Plotly output formats.

pub mod burn;
pub mod rewards;
pub mod supply;
pub mod utils;

use crate::analysis::burn_summary::BurnSummary;
use crate::analysis::rewards::RewardsView;
use crate::analysis::table::SortableTable;
use crate::errors::AppResult;
use crate::types::burn_history::DerivedBurnPoint;
use crate::types::supply::SupplyReport;
use std::str::FromStr;

/// Output format options for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Console,
    Json,
    Plotly,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "console" => Ok(OutputFormat::Console),
            "json" => Ok(OutputFormat::Json),
            "plotly" => Ok(OutputFormat::Plotly),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}

/// Facade for all report formatting operations
pub struct ReportFormatter;

impl ReportFormatter {
    // Burn
    pub fn format_burn_history(p: &[DerivedBurnPoint], f: &OutputFormat) -> AppResult<String> {
        burn::format_burn_history(p, f)
    }
    pub fn format_burn_summary(s: &BurnSummary, f: &OutputFormat) -> AppResult<String> {
        burn::format_burn_summary(s, f)
    }
    pub fn format_burn_table(t: &SortableTable, f: &OutputFormat) -> AppResult<String> {
        burn::format_burn_table(t, f)
    }

    // Supply
    pub fn format_supply_report(r: &SupplyReport, f: &OutputFormat) -> AppResult<String> {
        supply::format_supply_report(r, f)
    }

    // Rewards
    pub fn format_rewards(v: &RewardsView, show_tokens: bool, f: &OutputFormat) -> AppResult<String> {
        rewards::format_rewards(v, show_tokens, f)
    }

    // Utilities
    pub fn export_json<T: serde::Serialize>(data: &T) -> AppResult<String> {
        utils::export_json(data)
    }
}
