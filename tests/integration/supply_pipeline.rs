//! Supply distribution: history-derived burn share over a supply snapshot

use anyhow::Result;
use lava_burn_stats::analysis::{
    AnalysisEngine, OutputFormat, ReportFormatter, FALLBACK_CIRCULATING_SUPPLY,
    FALLBACK_TOTAL_SUPPLY,
};
use lava_burn_stats::api::fetch_supply_snapshot;
use lava_burn_stats::config::ApiConfig;
use lava_burn_stats::types::{SupplyDistribution, SupplySnapshot, SupplySource};
use tempfile::TempDir;

use crate::common::{write_fixture, SAMPLE_BURN_HISTORY};

#[test]
fn test_distribution_from_history() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_fixture(dir.path(), "burn_history.json", SAMPLE_BURN_HISTORY);
    let engine = AnalysisEngine::from_file(&path)?;

    let report = engine.supply_report(SupplySnapshot::live(1_000_000.0, 400_000.0))?;
    let d = &report.distribution;
    assert!((d.burned_percentage - 1.5).abs() < 1e-9);
    assert!((d.burned_amount - 15_000.0).abs() < 1e-6);
    assert!((d.locked_supply - 585_000.0).abs() < 1e-6);
    assert!((d.circulating_percentage - 40.0).abs() < 1e-9);

    let sum = d.circulating_percentage + d.burned_percentage + d.locked_percentage;
    assert!((sum - 100.0).abs() < 1e-9);
    Ok(())
}

#[tokio::test]
async fn test_unconfigured_backend_uses_fallback() -> Result<()> {
    let snapshot = fetch_supply_snapshot(&ApiConfig::default()).await;
    assert_eq!(snapshot.source, SupplySource::Fallback);
    assert_eq!(snapshot.total_supply, FALLBACK_TOTAL_SUPPLY);
    assert_eq!(snapshot.circulating_supply, FALLBACK_CIRCULATING_SUPPLY);

    let report = lava_burn_stats::types::SupplyReport {
        distribution: SupplyDistribution::from_snapshot(&snapshot, 0.5),
        snapshot,
    };
    let output = ReportFormatter::format_supply_report(&report, &OutputFormat::Console)?;
    assert!(output.contains("last-known supply"));
    Ok(())
}
