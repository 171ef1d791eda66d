//! Burn history input records and derived burn points

use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// One point-in-time supply observation
///
/// Written by the daily burn-rate generator: `day` is the calendar day,
/// `block_date` the block timestamp. Pruned blocks are emitted with an
/// `error` marker and a null supply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BurnHistoryRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_date: Option<String>,
    pub block: u64,
    #[serde(default)]
    pub supply: Option<f64>,
    #[serde(default)]
    pub supply_diff: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BurnHistoryRecord {
    /// Build a record keyed by calendar day
    pub fn new(day: &str, block: u64, supply: f64, supply_diff: Option<f64>) -> Self {
        Self {
            day: Some(day.to_string()),
            block_date: None,
            block,
            supply: Some(supply),
            supply_diff,
            error: None,
        }
    }

    /// Date identifier, preferring the calendar day over the block timestamp
    pub fn date(&self) -> Option<&str> {
        [self.day.as_deref(), self.block_date.as_deref()]
            .into_iter()
            .flatten()
            .find(|d| !d.trim().is_empty())
    }

    /// Whether the generator flagged this record (e.g. pruned block)
    pub fn is_flagged(&self) -> bool {
        self.error.is_some()
    }
}

/// A burn history document as produced by the generator scripts
///
/// The dashboard copy keys records under `blocks`; the daily generator writes
/// `data`. Both are accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BurnHistory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
    #[serde(alias = "data")]
    pub blocks: Vec<BurnHistoryRecord>,
}

impl BurnHistory {
    pub fn from_records(blocks: Vec<BurnHistoryRecord>) -> Self {
        Self {
            generated_at: None,
            blocks,
        }
    }

    /// Parse a burn history document from JSON text
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let history: BurnHistory = serde_json::from_str(json)?;
        debug!("Parsed burn history with {} records", history.blocks.len());
        Ok(history)
    }

    /// Load a burn history document wholesale from disk
    pub fn from_file<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let history = Self::from_json_str(&content)?;
        debug!("Loaded burn history from {}", path.display());
        Ok(history)
    }

    /// Records usable for burn derivation
    ///
    /// Flagged records are skipped. Positive diffs larger than the preceding
    /// supply are reported but kept.
    pub fn usable_records(&self) -> Vec<BurnHistoryRecord> {
        let usable: Vec<BurnHistoryRecord> = self
            .blocks
            .iter()
            .filter(|r| !r.is_flagged())
            .cloned()
            .collect();

        let skipped = self.blocks.len() - usable.len();
        if skipped > 0 {
            warn!("Skipping {} flagged burn history record(s)", skipped);
        }

        report_oversized_burns(&usable);
        usable
    }
}

fn report_oversized_burns(records: &[BurnHistoryRecord]) {
    let mut ordered: Vec<&BurnHistoryRecord> = records.iter().collect();
    ordered.sort_by_key(|r| r.block);

    for pair in ordered.windows(2) {
        let (prev, curr) = (pair[0], pair[1]);
        if let (Some(prev_supply), Some(diff)) = (prev.supply, curr.supply_diff) {
            if diff > 0.0 && diff > prev_supply {
                warn!(
                    "Block {} burns {} but only {} existed at block {}",
                    curr.block, diff, prev_supply, prev.block
                );
            }
        }
    }
}

/// Derived burn statistics for one history record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedBurnPoint {
    pub date: String,
    /// Remaining supply at this record
    pub amount: f64,
    /// Block height
    pub height: u64,
    /// Amount burned at this step (positive diffs only)
    pub diff: f64,
    pub cumulative_burn: f64,
    /// Cumulative burn as a percentage of the initial supply
    pub burn_rate: f64,
    /// Percentage-point change versus the previous point
    pub burn_rate_change: f64,
}
