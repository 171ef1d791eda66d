//! Staking reward documents

use crate::errors::AppResult;
use crate::utils::number::LooseValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Reward recipient groups shown as tabs on the rewards page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RewardCategory {
    Validators,
    Delegators,
    Providers,
    ProviderDelegators,
}

impl RewardCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            RewardCategory::Validators => "Validators",
            RewardCategory::Delegators => "Delegators",
            RewardCategory::Providers => "Providers",
            RewardCategory::ProviderDelegators => "Provider Delegators",
        }
    }
}

/// Column a reward table is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RewardSortKey {
    Address,
    #[default]
    Rewards,
}

/// One reward row: an address and the USD value it received
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardEntry {
    pub address: String,
    /// USD value, either a number or a `$`-prefixed string
    pub rewards: LooseValue,
    /// Per-token breakdown of the reward, when the generator recorded one
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tokens: Vec<ProcessedToken>,
}

/// Combined rewards document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RewardsData {
    #[serde(default)]
    pub totals: BTreeMap<String, LooseValue>,
    #[serde(default)]
    pub validator_rewards: Vec<RewardEntry>,
    #[serde(default)]
    pub validator_delegators: Vec<RewardEntry>,
    #[serde(default)]
    pub provider_rewards: Vec<RewardEntry>,
    #[serde(default)]
    pub provider_delegators: Vec<RewardEntry>,
}

impl RewardsData {
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Rows for one category, in document order
    pub fn entries(&self, category: RewardCategory) -> &[RewardEntry] {
        match category {
            RewardCategory::Validators => &self.validator_rewards,
            RewardCategory::Delegators => &self.validator_delegators,
            RewardCategory::Providers => &self.provider_rewards,
            RewardCategory::ProviderDelegators => &self.provider_delegators,
        }
    }
}

/// A reward token after denomination and USD conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedToken {
    pub amount: String,
    pub denom: String,
    #[serde(default)]
    pub original_denom: String,
    /// `$`-prefixed USD value
    pub value_usd: String,
}

/// Headline figures from the rewards-pools aggregator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PoolsSummary {
    #[serde(default)]
    pub total_rewards: Option<LooseValue>,
    #[serde(default)]
    pub total_past_rewards: Option<LooseValue>,
    #[serde(default)]
    pub total_future_rewards: Option<LooseValue>,
    #[serde(default)]
    pub total_requests: Option<u64>,
}

impl PoolsSummary {
    /// Past rewards in USD, 0 when absent or unparseable
    pub fn total_past_rewards_usd(&self) -> f64 {
        self.total_past_rewards
            .as_ref()
            .and_then(LooseValue::as_f64)
            .unwrap_or(0.0)
    }
}
