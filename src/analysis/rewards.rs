//! Reward table ordering and token aggregation

use crate::analysis::table::SortDirection;
use crate::types::rewards::{
    ProcessedToken, RewardCategory, RewardEntry, RewardSortKey, RewardsData,
};
use crate::utils::denom::{lookup, to_display_units};
use crate::utils::number::{format_dollar_value, LooseValue};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Totals key rendered after every other total
pub const TOTAL_REWARDS_KEY: &str = "total_rewards";

/// One rendered totals card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalLine {
    pub title: String,
    pub value: String,
}

/// A rewards page: totals cards plus one sorted category table
#[derive(Debug, Clone, Serialize)]
pub struct RewardsView {
    pub category: RewardCategory,
    pub sort_key: RewardSortKey,
    pub direction: SortDirection,
    pub totals: Vec<TotalLine>,
    pub entries: Vec<RewardEntry>,
    /// Past rewards reported by the pools aggregator, when fetched
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_past_rewards_usd: Option<f64>,
}

impl RewardsView {
    pub fn build(
        data: &RewardsData,
        category: RewardCategory,
        sort_key: RewardSortKey,
        direction: SortDirection,
    ) -> Self {
        Self {
            category,
            sort_key,
            direction,
            totals: ordered_totals(&data.totals)
                .into_iter()
                .map(|(title, value)| TotalLine { title, value })
                .collect(),
            entries: sort_entries(data.entries(category), sort_key, direction),
            total_past_rewards_usd: None,
        }
    }

    pub fn with_past_rewards(mut self, usd: f64) -> Self {
        self.total_past_rewards_usd = Some(usd);
        self
    }
}

/// Sort reward rows by address (text) or rewards (USD value)
///
/// Rewards that cannot be read as a number sort as 0.
pub fn sort_entries(
    entries: &[RewardEntry],
    key: RewardSortKey,
    direction: SortDirection,
) -> Vec<RewardEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = match key {
            RewardSortKey::Address => a.address.cmp(&b.address),
            RewardSortKey::Rewards => reward_value(a).total_cmp(&reward_value(b)),
        };
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    sorted
}

fn reward_value(entry: &RewardEntry) -> f64 {
    entry.rewards.as_f64().unwrap_or(0.0)
}

/// Totals as (title, formatted value) pairs, `total_rewards` last
///
/// Titles replace underscores with spaces.
pub fn ordered_totals(totals: &BTreeMap<String, LooseValue>) -> Vec<(String, String)> {
    let title = |key: &str| key.replace('_', " ");

    let mut ordered: Vec<(String, String)> = totals
        .iter()
        .filter(|(key, _)| key.as_str() != TOTAL_REWARDS_KEY)
        .map(|(key, value)| (title(key), format_dollar_value(value.clone())))
        .collect();

    if let Some(total) = totals.get(TOTAL_REWARDS_KEY) {
        ordered.push((title(TOTAL_REWARDS_KEY), format_dollar_value(total.clone())));
    }
    ordered
}

/// Express a token in display units when it still carries a base denomination
///
/// Tokens already in display units are returned unchanged.
pub fn normalise_token(token: &ProcessedToken) -> ProcessedToken {
    if lookup(&token.denom).is_none() {
        return token.clone();
    }
    let (amount, denom) = to_display_units(parse_or_zero(&token.amount), &token.denom);
    ProcessedToken {
        amount: amount.to_string(),
        original_denom: token.denom.clone(),
        denom,
        value_usd: token.value_usd.clone(),
    }
}

fn usd_value(token: &ProcessedToken) -> f64 {
    parse_or_zero(&token.value_usd.replace('$', ""))
}

fn parse_or_zero(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(0.0)
}

/// Merge tokens sharing a denom, largest USD value first
///
/// Tokens are normalised to display units first. Amounts and USD values are
/// summed; the merged token keeps the other fields of the last token seen for
/// that denom.
pub fn aggregate_tokens(tokens: &[ProcessedToken]) -> Vec<ProcessedToken> {
    let mut merged: Vec<ProcessedToken> = Vec::new();

    for token in tokens.iter().map(normalise_token) {
        match merged.iter_mut().find(|t| t.denom == token.denom) {
            Some(existing) => {
                let amount = parse_or_zero(&existing.amount) + parse_or_zero(&token.amount);
                let value = usd_value(existing) + usd_value(&token);
                *existing = ProcessedToken {
                    amount: amount.to_string(),
                    value_usd: format!("${}", value),
                    ..token
                };
            }
            None => merged.push(token),
        }
    }

    merged.sort_by(|a, b| {
        usd_value(b)
            .partial_cmp(&usd_value(a))
            .unwrap_or(Ordering::Equal)
    });
    merged
}

/// Sum of USD values across tokens
pub fn total_usd(tokens: &[ProcessedToken]) -> f64 {
    tokens.iter().map(usd_value).sum()
}
