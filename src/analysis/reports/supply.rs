//! Supply distribution report formatter

use super::utils::{card_line, export_json};
use super::OutputFormat;
use crate::errors::AppResult;
use crate::types::supply::{SupplyReport, SupplySource};
use crate::utils::currency::{format_lava_with_symbol, format_millions_label};

const CARD_LABEL_WIDTH: usize = 20;

pub fn format_supply_report(report: &SupplyReport, format: &OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Console => {
            let d = &report.distribution;
            let w = CARD_LABEL_WIDTH;
            let mut output = String::new();
            output.push_str("=== LAVA SUPPLY DISTRIBUTION ===\n\n");
            if report.snapshot.source == SupplySource::Fallback {
                output.push_str("(backend unavailable, showing last-known supply)\n\n");
            }

            output.push_str(&card_line(
                "Total Supply",
                &format_lava_with_symbol(d.total_supply),
                w,
            ));
            for (label, value, percentage) in [
                ("Circulating Supply", d.circulating_supply, d.circulating_percentage),
                ("Burned Supply", d.burned_amount, d.burned_percentage),
                ("Locked Supply", d.locked_supply, d.locked_percentage),
            ] {
                output.push_str(&card_line(
                    label,
                    &format!("{} ({:.2}%)", format_millions_label(value), percentage),
                    w,
                ));
            }
            Ok(output)
        }
        OutputFormat::Json => export_json(report),
        OutputFormat::Plotly => export_json(&report.distribution.to_plotly_chart()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::supply::{SupplyDistribution, SupplySnapshot};

    fn report(snapshot: SupplySnapshot) -> SupplyReport {
        SupplyReport {
            distribution: SupplyDistribution::from_snapshot(&snapshot, 2.0),
            snapshot,
        }
    }

    #[test]
    fn test_console_fallback_notice() {
        let output =
            format_supply_report(&report(SupplySnapshot::fallback()), &OutputFormat::Console)
                .unwrap();
        assert!(output.contains("last-known supply"));
        assert!(output.contains("Circulating Supply:"));
        assert!(output.contains("277.08M LAVA"));
        assert!(output.contains("985,088,593.000 LAVA"));
    }

    #[test]
    fn test_console_live_has_no_notice() {
        let live = SupplySnapshot::live(1_000_000.0, 250_000.0);
        let output = format_supply_report(&report(live), &OutputFormat::Console).unwrap();
        assert!(!output.contains("last-known"));
        assert!(output.contains("Burned Supply:"));
        assert!(output.contains("(2.00%)"));
    }

    #[test]
    fn test_json_includes_source() {
        let output =
            format_supply_report(&report(SupplySnapshot::fallback()), &OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["snapshot"]["source"], "fallback");
        assert!(value["distribution"]["locked_supply"].is_number());
    }

    #[test]
    fn test_plotly_pie() {
        let output =
            format_supply_report(&report(SupplySnapshot::fallback()), &OutputFormat::Plotly)
                .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["data"][0]["type"], "pie");
        assert_eq!(value["data"][0]["labels"].as_array().map(Vec::len), Some(3));
    }
}
