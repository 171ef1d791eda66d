//! LAVA burn statistics - Type System
//!
//! - `burn_history`: Raw burn history records and the derived per-block burn points
//! - `supply`: Supply snapshots and the circulating/burned/locked distribution
//! - `rewards`: Staking reward documents, reward rows and processed tokens
//! - `visualisation`: Plotly chart documents consumed by the dashboard

pub mod burn_history;
pub mod rewards;
pub mod supply;
pub mod visualisation;

pub use burn_history::{BurnHistory, BurnHistoryRecord, DerivedBurnPoint};
pub use rewards::{
    PoolsSummary, ProcessedToken, RewardCategory, RewardEntry, RewardSortKey, RewardsData,
};
pub use supply::{SupplyDistribution, SupplyReport, SupplySnapshot, SupplySource};
