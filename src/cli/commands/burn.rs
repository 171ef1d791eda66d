use super::{emit, parse_format, resolve_input};
use crate::analysis::{AnalysisEngine, ReportFormatter};
use crate::config::AppConfig;
use crate::errors::{AppError, AppResult};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

fn load_engine(input: &Option<PathBuf>, config: &AppConfig) -> AppResult<AnalysisEngine> {
    let path = resolve_input(input, &config.paths.burn_history);
    info!("Loading burn history from {}", path.display());
    AnalysisEngine::from_file(&path)
}

/// Derived burn history: table, JSON points or stacked bar chart
#[derive(Args)]
pub struct BurnHistoryCommand {
    /// Burn history JSON (overrides config.toml)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Output format (console, json, or plotly)
    #[arg(long, default_value = "console")]
    pub format: String,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

impl BurnHistoryCommand {
    pub fn run(&self) -> AppResult<()> {
        let config = AppConfig::load()?;
        let engine = load_engine(&self.input, &config)?;
        let points = engine.burn_points()?;
        let output = ReportFormatter::format_burn_history(&points, &parse_format(&self.format))?;
        emit(&output, &self.output, "Burn history")
    }
}

/// Headline burn figures and moving average
#[derive(Args)]
pub struct BurnSummaryCommand {
    /// Burn history JSON (overrides config.toml)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Moving-average window in records (overrides config.toml)
    #[arg(long)]
    pub window: Option<usize>,

    /// Output format (console, json, or plotly)
    #[arg(long, default_value = "console")]
    pub format: String,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

impl BurnSummaryCommand {
    pub fn run(&self) -> AppResult<()> {
        let config = AppConfig::load()?;
        let engine = load_engine(&self.input, &config)?;
        let window = self.window.unwrap_or(config.display.moving_average_window);
        let summary = engine.summary(window)?;
        let output = ReportFormatter::format_burn_summary(&summary, &parse_format(&self.format))?;
        emit(&output, &self.output, "Burn summary")
    }
}

/// Click a burn table header one or more times and show the result
#[derive(Args)]
pub struct SortBurnTableCommand {
    /// Burn history JSON (overrides config.toml)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Column to click (0 = Date, 1 = Block, 2 = Supply, 3 = Burned, 4 = Burn Rate, 5 = Burn Rate Change)
    #[arg(long)]
    pub column: usize,

    /// Number of clicks on the column
    #[arg(long, default_value = "1")]
    pub clicks: usize,

    /// Output format (console or json)
    #[arg(long, default_value = "console")]
    pub format: String,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

impl SortBurnTableCommand {
    pub fn run(&self) -> AppResult<()> {
        let config = AppConfig::load()?;
        let engine = load_engine(&self.input, &config)?;
        let mut table = engine.burn_table()?;

        if self.column >= table.headers.len() {
            return Err(AppError::InvalidData(format!(
                "column {} out of range, the burn table has {} columns",
                self.column,
                table.headers.len()
            )));
        }
        for _ in 0..self.clicks {
            table.click(self.column);
        }

        let output = ReportFormatter::format_burn_table(&table, &parse_format(&self.format))?;
        emit(&output, &self.output, "Burn table")
    }
}
