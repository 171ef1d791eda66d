//! Burn derivation from supply history
//!
//! Turns a set of supply observations into a per-record series of cumulative
//! burn, burn rate (percentage of the initial supply) and burn-rate change.
//! The derivation is a pure function of its input: records are validated,
//! ordered by block height and walked once.

use crate::errors::{AppError, AppResult};
use crate::types::burn_history::{BurnHistoryRecord, DerivedBurnPoint};
use crate::utils::math::safe_percentage;
use std::cmp::Ordering;
use tracing::debug;

/// A record that passed validation, with its required fields unwrapped
struct CheckedRecord<'a> {
    date: &'a str,
    block: u64,
    supply: f64,
    supply_diff: Option<f64>,
}

/// Derives burn statistics for every record
///
/// Input order is irrelevant: records are sorted ascending by block height
/// (ties broken by date, then supply) before the walk. Only strictly positive
/// `supply_diff` values count as burn; negative or missing diffs contribute
/// nothing. The initial supply is the largest supply in the series, and burn
/// rate is 0 when that is 0.
///
/// Fails with [`AppError::InvalidRecord`] before producing any output if a
/// record lacks a date or supply, has a negative or non-finite supply, or has
/// a non-finite diff.
///
/// ```
/// use lava_burn_stats::analysis::burn_calculator::calculate_burn_data;
/// use lava_burn_stats::types::BurnHistoryRecord;
///
/// let records = vec![
///     BurnHistoryRecord::new("2024-12-01", 1, 1000.0, Some(0.0)),
///     BurnHistoryRecord::new("2024-12-02", 2, 990.0, Some(10.0)),
/// ];
/// let points = calculate_burn_data(&records).unwrap();
/// assert_eq!(points[1].cumulative_burn, 10.0);
/// assert_eq!(points[1].burn_rate, 1.0);
/// ```
pub fn calculate_burn_data(records: &[BurnHistoryRecord]) -> AppResult<Vec<DerivedBurnPoint>> {
    let mut checked = records
        .iter()
        .map(check_record)
        .collect::<AppResult<Vec<_>>>()?;

    checked.sort_by(|a, b| {
        a.block
            .cmp(&b.block)
            .then_with(|| a.date.cmp(b.date))
            .then_with(|| a.supply.partial_cmp(&b.supply).unwrap_or(Ordering::Equal))
    });

    let initial_supply = checked.iter().map(|r| r.supply).fold(0.0, f64::max);
    debug!(
        "Deriving burn data for {} records, initial supply {}",
        checked.len(),
        initial_supply
    );

    let mut total_burn = 0.0;
    let mut previous_rate: Option<f64> = None;
    let points = checked
        .into_iter()
        .map(|record| {
            let diff = match record.supply_diff {
                Some(d) if d > 0.0 => d,
                _ => 0.0,
            };
            total_burn += diff;

            let burn_rate = safe_percentage(total_burn, initial_supply);
            let burn_rate_change = previous_rate.map_or(0.0, |prev| burn_rate - prev);
            previous_rate = Some(burn_rate);

            DerivedBurnPoint {
                date: record.date.to_string(),
                amount: record.supply,
                height: record.block,
                diff,
                cumulative_burn: total_burn,
                burn_rate,
                burn_rate_change,
            }
        })
        .collect();

    Ok(points)
}

/// Reverse-chronological view of derived points for table display
pub fn for_table_display(points: &[DerivedBurnPoint]) -> Vec<DerivedBurnPoint> {
    points.iter().rev().cloned().collect()
}

fn check_record(record: &BurnHistoryRecord) -> AppResult<CheckedRecord<'_>> {
    let invalid = |reason: &str| AppError::InvalidRecord {
        block: record.block,
        reason: reason.to_string(),
    };

    let date = record.date().ok_or_else(|| invalid("missing date"))?;
    let supply = record.supply.ok_or_else(|| invalid("missing supply"))?;
    if !supply.is_finite() {
        return Err(invalid("supply is not a finite number"));
    }
    if supply < 0.0 {
        return Err(invalid("supply is negative"));
    }
    if let Some(diff) = record.supply_diff {
        if !diff.is_finite() {
            return Err(invalid("supply_diff is not a finite number"));
        }
    }

    Ok(CheckedRecord {
        date,
        block: record.block,
        supply,
        supply_diff: record.supply_diff,
    })
}
