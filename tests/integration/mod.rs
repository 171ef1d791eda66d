//! Integration Tests Module
//!
//! End-to-end tests that load fixture documents from disk and run them through
//! derivation, sorting and report formatting.

pub mod burn_pipeline;
pub mod rewards_pipeline;
pub mod supply_pipeline;
