//! Supply snapshot and distribution types

use serde::{Deserialize, Serialize};

/// Where a supply snapshot's numbers came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplySource {
    /// Fetched from the backend API
    Live,
    /// Last-known values used because the fetch failed
    Fallback,
}

/// Total and circulating supply at a point in time, in LAVA
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplySnapshot {
    pub total_supply: f64,
    pub circulating_supply: f64,
    pub source: SupplySource,
}

/// Split of the total supply into circulating, burned and locked slices
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplyDistribution {
    pub total_supply: f64,
    pub circulating_supply: f64,
    pub burned_amount: f64,
    pub locked_supply: f64,
    pub circulating_percentage: f64,
    pub burned_percentage: f64,
    pub locked_percentage: f64,
}

/// A supply snapshot together with the distribution derived from it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplyReport {
    pub snapshot: SupplySnapshot,
    pub distribution: SupplyDistribution,
}
