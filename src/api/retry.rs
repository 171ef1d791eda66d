//! Retry helpers for backend requests
//!
//! Exponential backoff with a cap, and an async driver that retries an
//! operation while its error is retryable.

use crate::config::ApiConfig;
use crate::errors::{ApiError, ApiResult};
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Calculate next backoff duration using exponential backoff with a maximum cap
///
/// `new_backoff = min(current_backoff * multiplier, max_backoff)`
///
/// # Example
/// ```
/// use std::time::Duration;
/// use lava_burn_stats::api::calculate_next_backoff;
///
/// let backoff = Duration::from_millis(100);
/// let next = calculate_next_backoff(backoff, 2.0, 30);
/// assert_eq!(next, Duration::from_millis(200));
/// ```
pub fn calculate_next_backoff(
    current_backoff: Duration,
    multiplier: f64,
    max_backoff_seconds: u64,
) -> Duration {
    Duration::from_millis((current_backoff.as_millis() as f64 * multiplier) as u64)
        .min(Duration::from_secs(max_backoff_seconds))
}

/// How often and how patiently a request is retried
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Retries after the first attempt
    pub retry_count: usize,
    pub initial_backoff: Duration,
    pub backoff_multiplier: f64,
    pub max_backoff_seconds: u64,
}

impl RetryPolicy {
    pub fn from_config(config: &ApiConfig) -> Self {
        Self {
            retry_count: config.retry_count,
            initial_backoff: Duration::from_millis(config.initial_backoff_ms),
            backoff_multiplier: config.backoff_multiplier,
            max_backoff_seconds: config.max_backoff_seconds,
        }
    }

    pub fn max_attempts(&self) -> usize {
        self.retry_count + 1
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&ApiConfig::default())
    }
}

/// Run `operation` until it succeeds, fails permanently, or runs out of attempts
///
/// Errors that are not retryable are returned as-is on the attempt they occur.
/// Exhausting the attempts yields [`ApiError::MaxRetriesExceeded`].
pub async fn retry_with_backoff<T, F, Fut>(
    endpoint: &str,
    policy: &RetryPolicy,
    mut operation: F,
) -> ApiResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ApiResult<T>>,
{
    let max_attempts = policy.max_attempts();
    let mut backoff = policy.initial_backoff;

    for attempt in 1..=max_attempts {
        match operation().await {
            Ok(value) => {
                if attempt > 1 {
                    debug!("{} succeeded after {} attempts", endpoint, attempt);
                }
                return Ok(value);
            }
            Err(e) if !e.is_retryable() => return Err(e),
            Err(e) if attempt == max_attempts => {
                warn!("{} failed after {} attempts: {}", endpoint, attempt, e);
            }
            Err(e) => {
                warn!(
                    "Attempt {} for {} failed, retrying in {:?}: {}",
                    attempt, endpoint, backoff, e
                );
                sleep(backoff).await;
                backoff = calculate_next_backoff(
                    backoff,
                    policy.backoff_multiplier,
                    policy.max_backoff_seconds,
                );
            }
        }
    }

    Err(ApiError::MaxRetriesExceeded {
        endpoint: endpoint.to_string(),
        attempts: max_attempts,
    })
}
