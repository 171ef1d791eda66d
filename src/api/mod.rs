//! Remote data sources
//!
//! - **Client** - jsinfobe REST backend (supply figures) and the rewards-pools aggregator
//! - **Cache** - TTL cache of backend responses
//! - **Retry** - Exponential backoff retry utilities
//!
//! Both clients use `reqwest`; failures surface as [`ApiError`](crate::errors::ApiError).
//! Supply lookups degrade to last-known figures instead of failing.

pub mod cache;
pub mod client;
pub mod retry;

// Re-export main types
pub use cache::{CacheStats, ResponseCache};
pub use client::{
    fetch_pools_summary, fetch_supply_snapshot, join_url, parse_supply_text, JsinfobeClient,
    PoolsClient,
};
pub use retry::{calculate_next_backoff, retry_with_backoff, RetryPolicy};
