//! Common Test Utilities
//!
//! Fixture documents and helpers for writing them into temporary directories.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Dashboard-style burn history, deliberately out of order, with one pruned block
pub const SAMPLE_BURN_HISTORY: &str = r#"{
    "blocks": [
        {"day": "2024-12-03", "block": 3, "supply": 985.0, "supply_diff": 5.0},
        {"day": "2024-12-02", "block": 2, "supply": 990.0, "supply_diff": 10.0},
        {"day": "2024-12-01", "block": 1, "supply": 1000.0, "supply_diff": 0.0},
        {"target_date": "2024-12-04", "block": 4, "supply": null, "error": "pruned"}
    ]
}"#;

/// Generator-style document keyed under `data`, including a supply increase
pub const GENERATOR_BURN_HISTORY: &str = r#"{
    "generated_at": "2025-01-01T12:13:59.662815",
    "data": [
        {"block_date": "2024-12-01T00:00:04Z", "block": 100, "supply": 985500000.0, "supply_diff": 0},
        {"block_date": "2024-12-02T00:00:02Z", "block": 200, "supply": 985450000.0, "supply_diff": 50000.0},
        {"block_date": "2024-12-03T00:00:05Z", "block": 300, "supply": 985460000.0, "supply_diff": -10000.0},
        {"block_date": "2024-12-04T00:00:01Z", "block": 400, "supply": 985400000.0, "supply_diff": 60000.0}
    ]
}"#;

pub const SAMPLE_REWARDS: &str = r#"{
    "totals": {
        "total_rewards": 1234.5,
        "validator_rewards": "$1,000.00",
        "provider_rewards": 234.5
    },
    "validator_rewards": [
        {"address": "lava@valoper1aaa", "rewards": "$200.00",
         "tokens": [
            {"amount": "1000000000", "denom": "ulava", "value_usd": "$150"},
            {"amount": "5", "denom": "atom", "original_denom": "uatom", "value_usd": "$50"}
         ]},
        {"address": "lava@valoper1bbb", "rewards": 800}
    ],
    "validator_delegators": [],
    "provider_rewards": [
        {"address": "lava@provider1", "rewards": "$34.50"},
        {"address": "lava@provider2", "rewards": "$200"}
    ],
    "provider_delegators": []
}"#;

/// Write `content` to `dir/name` and return the full path
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}
