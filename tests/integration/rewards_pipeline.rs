//! Rewards pipeline: load → sort → totals / token breakdown

use anyhow::Result;
use lava_burn_stats::analysis::{OutputFormat, ReportFormatter, RewardsView, SortDirection};
use lava_burn_stats::types::{RewardCategory, RewardSortKey, RewardsData};
use tempfile::TempDir;

use crate::common::{write_fixture, SAMPLE_REWARDS};

fn load_sample() -> Result<RewardsData> {
    let dir = TempDir::new()?;
    let path = write_fixture(dir.path(), "all_rewards.json", SAMPLE_REWARDS);
    Ok(RewardsData::from_file(&path)?)
}

#[test]
fn test_validators_sorted_by_rewards() -> Result<()> {
    let data = load_sample()?;
    let view = RewardsView::build(
        &data,
        RewardCategory::Validators,
        RewardSortKey::Rewards,
        SortDirection::Desc,
    );

    let order: Vec<&str> = view.entries.iter().map(|e| e.address.as_str()).collect();
    assert_eq!(order, vec!["lava@valoper1bbb", "lava@valoper1aaa"]);

    let titles: Vec<&str> = view.totals.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["provider rewards", "validator rewards", "total rewards"]
    );
    assert_eq!(view.totals[2].value, "$1,234.50");
    assert_eq!(view.totals[0].value, "$234.50");
    Ok(())
}

#[test]
fn test_providers_sorted_by_address_ascending() -> Result<()> {
    let data = load_sample()?;
    let view = RewardsView::build(
        &data,
        RewardCategory::Providers,
        RewardSortKey::Address,
        SortDirection::Asc,
    );
    assert_eq!(view.entries[0].address, "lava@provider1");

    let output = ReportFormatter::format_rewards(&view, false, &OutputFormat::Console)?;
    assert!(output.contains("Providers (2 entries)"));
    assert!(output.contains("Address ↑"));
    assert!(output.contains("$34.50"));
    Ok(())
}

#[test]
fn test_token_breakdown_converts_base_denoms() -> Result<()> {
    let data = load_sample()?;
    let view = RewardsView::build(
        &data,
        RewardCategory::Validators,
        RewardSortKey::Address,
        SortDirection::Asc,
    );

    let output = ReportFormatter::format_rewards(&view, true, &OutputFormat::Console)?;
    assert!(output.contains("    1,000 lava  $150.00"));
    assert!(output.contains("    5 atom  $50.00"));
    Ok(())
}

#[test]
fn test_json_view_round_trips_entries() -> Result<()> {
    let data = load_sample()?;
    let view = RewardsView::build(
        &data,
        RewardCategory::Delegators,
        RewardSortKey::Rewards,
        SortDirection::Desc,
    );

    let output = ReportFormatter::format_rewards(&view, false, &OutputFormat::Json)?;
    let value: serde_json::Value = serde_json::from_str(&output)?;
    assert_eq!(value["category"], "delegators");
    assert_eq!(value["direction"], "desc");
    assert_eq!(value["entries"].as_array().map(Vec::len), Some(0));
    Ok(())
}
