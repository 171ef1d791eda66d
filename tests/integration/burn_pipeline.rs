//! Burn history pipeline: load → derive → table / summary / chart

use anyhow::Result;
use lava_burn_stats::analysis::{AnalysisEngine, OutputFormat, ReportFormatter, SortDirection};
use lava_burn_stats::errors::AppError;
use tempfile::TempDir;

use crate::common::{write_fixture, GENERATOR_BURN_HISTORY, SAMPLE_BURN_HISTORY};

fn sample_engine() -> Result<(TempDir, AnalysisEngine)> {
    let dir = TempDir::new()?;
    let path = write_fixture(dir.path(), "burn_history.json", SAMPLE_BURN_HISTORY);
    let engine = AnalysisEngine::from_file(&path)?;
    Ok((dir, engine))
}

#[test]
fn test_derivation_from_file() -> Result<()> {
    let (_dir, engine) = sample_engine()?;
    let points = engine.burn_points()?;

    assert_eq!(points.len(), 3);
    let cumulative: Vec<f64> = points.iter().map(|p| p.cumulative_burn).collect();
    assert_eq!(cumulative, vec![0.0, 10.0, 15.0]);
    assert!((points[1].burn_rate - 1.0).abs() < 1e-9);
    assert!((points[2].burn_rate - 1.5).abs() < 1e-9);
    assert!((points[2].burn_rate_change - 0.5).abs() < 1e-9);
    assert_eq!(points[0].burn_rate_change, 0.0);
    Ok(())
}

#[test]
fn test_generator_document_with_supply_increase() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_fixture(dir.path(), "daily.json", GENERATOR_BURN_HISTORY);
    let engine = AnalysisEngine::from_file(&path)?;
    let points = engine.burn_points()?;

    assert_eq!(points.len(), 4);
    assert_eq!(points[2].diff, 0.0);
    assert_eq!(points[2].cumulative_burn, 50_000.0);
    assert_eq!(points[3].cumulative_burn, 110_000.0);
    assert_eq!(points[0].date, "2024-12-01T00:00:04Z");

    let summary = engine.summary(2)?;
    assert_eq!(summary.burn_days, 2);
    assert_eq!(summary.total_burned, 110_000.0);
    assert_eq!(summary.elapsed_days, Some(3));
    Ok(())
}

#[test]
fn test_console_table_is_newest_first() -> Result<()> {
    let (_dir, engine) = sample_engine()?;
    let output =
        ReportFormatter::format_burn_history(&engine.burn_points()?, &OutputFormat::Console)?;

    let newest = output.find("December 3, 2024").unwrap();
    let oldest = output.find("December 1, 2024").unwrap();
    assert!(newest < oldest);
    assert!(output.contains("1.5000%"));
    assert!(!output.contains("December 4, 2024"));
    Ok(())
}

#[test]
fn test_json_points_use_camel_case() -> Result<()> {
    let (_dir, engine) = sample_engine()?;
    let output = ReportFormatter::format_burn_history(&engine.burn_points()?, &OutputFormat::Json)?;
    let value: serde_json::Value = serde_json::from_str(&output)?;

    assert_eq!(value.as_array().map(Vec::len), Some(3));
    assert_eq!(value[2]["cumulativeBurn"], 15.0);
    assert_eq!(value[2]["height"], 3);
    assert!(value[0].get("burnRateChange").is_some());
    Ok(())
}

#[test]
fn test_plotly_chart_is_stacked() -> Result<()> {
    let (_dir, engine) = sample_engine()?;
    let output =
        ReportFormatter::format_burn_history(&engine.burn_points()?, &OutputFormat::Plotly)?;
    let value: serde_json::Value = serde_json::from_str(&output)?;

    assert_eq!(value["data"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["data"][0]["type"], "bar");
    assert_eq!(value["layout"]["barmode"], "stack");
    Ok(())
}

#[test]
fn test_sort_table_click_cycle() -> Result<()> {
    let (_dir, engine) = sample_engine()?;
    let mut table = engine.burn_table()?;
    let dates = |t: &lava_burn_stats::analysis::SortableTable| -> Vec<String> {
        t.rows.iter().map(|r| r[0].clone()).collect()
    };
    let initial = dates(&table);

    // Date column sorts by block
    assert_eq!(table.click(0), Some(SortDirection::Asc));
    assert_eq!(dates(&table)[0], "December 1, 2024");
    assert_eq!(table.click(0), Some(SortDirection::Desc));
    assert_eq!(dates(&table), initial);
    assert_eq!(table.click(0), None);
    assert_eq!(table.state.active_column, None);

    // Burned column puts the "-" row after the numeric rows
    table.click(3);
    assert_eq!(table.rows[2][3], "-");

    let output = ReportFormatter::format_burn_table(&table, &OutputFormat::Console)?;
    assert!(output.starts_with("Sorted by Burned (Asc)"));
    Ok(())
}

#[test]
fn test_invalid_record_fails_fast() -> Result<()> {
    let dir = TempDir::new()?;
    let path = write_fixture(
        dir.path(),
        "broken.json",
        r#"{"blocks": [
            {"day": "2024-12-01", "block": 1, "supply": 1000.0, "supply_diff": 0},
            {"day": "2024-12-02", "block": 2, "supply_diff": 10.0}
        ]}"#,
    );
    let engine = AnalysisEngine::from_file(&path)?;

    match engine.burn_points() {
        Err(AppError::InvalidRecord { block, .. }) => assert_eq!(block, 2),
        other => panic!("expected InvalidRecord, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let result = AnalysisEngine::from_file(dir.path().join("absent.json"));
    assert!(matches!(result, Err(AppError::Io(_))));
}

#[test]
fn test_malformed_json_is_json_error() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(dir.path(), "bad.json", "{\"blocks\": [");
    assert!(matches!(
        AnalysisEngine::from_file(&path),
        Err(AppError::Json(_))
    ));
}

#[test]
fn test_summary_console_cards() -> Result<()> {
    let (_dir, engine) = sample_engine()?;
    let output = ReportFormatter::format_burn_summary(&engine.summary(7)?, &OutputFormat::Console)?;

    assert!(output.contains("Total Burned"));
    assert!(output.contains("15.000 LAVA"));
    assert!(output.contains("Burn Days"));
    assert!(output.contains("Latest: December 3, 2024 at block 3"));
    Ok(())
}
