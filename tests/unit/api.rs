//! Fetch-layer helpers that need no network

use lava_burn_stats::api::{calculate_next_backoff, join_url, parse_supply_text, RetryPolicy};
use lava_burn_stats::config::ApiConfig;
use lava_burn_stats::errors::ApiError;
use std::time::Duration;

#[test]
fn test_backoff_sequence_from_defaults() {
    let policy = RetryPolicy::from_config(&ApiConfig::default());
    let mut backoff = policy.initial_backoff;
    let mut sequence = Vec::new();
    for _ in 0..6 {
        sequence.push(backoff);
        backoff = calculate_next_backoff(
            backoff,
            policy.backoff_multiplier,
            policy.max_backoff_seconds,
        );
    }

    assert_eq!(
        sequence,
        vec![
            Duration::from_millis(200),
            Duration::from_millis(400),
            Duration::from_millis(800),
            Duration::from_millis(1600),
            Duration::from_millis(3200),
            Duration::from_secs(5),
        ]
    );
}

#[test]
fn test_supply_endpoints_join_cleanly() {
    assert_eq!(
        join_url("https://jsinfo.lavanet.xyz/", "supply/total"),
        "https://jsinfo.lavanet.xyz/supply/total"
    );
}

#[test]
fn test_supply_text() {
    assert_eq!(parse_supply_text("supply/total", " 985088593 ").unwrap(), 985_088_593.0);
    assert!(matches!(
        parse_supply_text("supply/total", "undefined"),
        Err(ApiError::InvalidResponse { .. })
    ));
}

#[test]
fn test_retryable_errors() {
    let status = |status| ApiError::HttpStatus {
        endpoint: "supply/total".to_string(),
        status,
    };
    assert!(status(503).is_retryable());
    assert!(status(429).is_retryable());
    assert!(!status(404).is_retryable());
    assert!(!ApiError::NotConfigured("x".to_string()).is_retryable());
}
