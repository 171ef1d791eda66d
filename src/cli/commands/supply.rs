use super::{emit, parse_format, resolve_input};
use crate::analysis::{AnalysisEngine, ReportFormatter};
use crate::api::fetch_supply_snapshot;
use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::types::supply::{SupplyDistribution, SupplyReport};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Circulating, burned and locked supply split
#[derive(Args)]
pub struct SupplyCommand {
    /// Burn history JSON used for the burned share (overrides config.toml)
    #[arg(long, conflicts_with = "burned_percentage")]
    pub input: Option<PathBuf>,

    /// Burned share of the initial supply, in percent, instead of deriving it
    #[arg(long)]
    pub burned_percentage: Option<f64>,

    /// Output format (console, json, or plotly)
    #[arg(long, default_value = "console")]
    pub format: String,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

impl SupplyCommand {
    pub async fn run(&self) -> AppResult<()> {
        let config = AppConfig::load()?;
        let snapshot = fetch_supply_snapshot(&config.api).await;

        let report = match self.burned_percentage {
            Some(percentage) => SupplyReport {
                distribution: SupplyDistribution::from_snapshot(&snapshot, percentage),
                snapshot,
            },
            None => {
                let path = resolve_input(&self.input, &config.paths.burn_history);
                info!("Deriving burned share from {}", path.display());
                AnalysisEngine::from_file(&path)?.supply_report(snapshot)?
            }
        };

        let output = ReportFormatter::format_supply_report(&report, &parse_format(&self.format))?;
        emit(&output, &self.output, "Supply distribution")
    }
}
