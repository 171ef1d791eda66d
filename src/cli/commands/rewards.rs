use super::{emit, parse_format, resolve_input};
use crate::analysis::table::SortDirection;
use crate::analysis::{ReportFormatter, RewardsView};
use crate::api::fetch_pools_summary;
use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::types::rewards::{RewardCategory, RewardSortKey, RewardsData};
use clap::Args;
use std::path::PathBuf;
use tracing::{info, warn};

/// Reward totals and one sorted reward category
#[derive(Args)]
pub struct RewardsCommand {
    /// Rewards JSON (overrides config.toml)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Reward category to list
    #[arg(long, value_enum, default_value = "validators")]
    pub category: RewardCategory,

    /// Column to sort rows by
    #[arg(long, value_enum, default_value = "rewards")]
    pub sort_by: RewardSortKey,

    /// Sort direction
    #[arg(long, value_enum, default_value = "desc")]
    pub direction: SortDirection,

    /// List each row's per-token breakdown instead of the table
    #[arg(long)]
    pub show_tokens: bool,

    /// Also fetch past rewards from the rewards-pools aggregator
    #[arg(long)]
    pub with_pools: bool,

    /// Output format (console or json)
    #[arg(long, default_value = "console")]
    pub format: String,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

impl RewardsCommand {
    pub async fn run(&self) -> AppResult<()> {
        let config = AppConfig::load()?;
        let path = resolve_input(&self.input, &config.paths.rewards);
        info!("Loading rewards from {}", path.display());

        let data = RewardsData::from_file(&path)?;
        let mut view = RewardsView::build(&data, self.category, self.sort_by, self.direction);

        if self.with_pools {
            match fetch_pools_summary(&config.aggregator, &config.api).await {
                Ok(summary) => view = view.with_past_rewards(summary.total_past_rewards_usd()),
                Err(e) => warn!("Pools aggregator unavailable: {}", e),
            }
        }

        let output =
            ReportFormatter::format_rewards(&view, self.show_tokens, &parse_format(&self.format))?;
        emit(&output, &self.output, "Rewards")
    }
}
