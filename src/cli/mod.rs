use crate::errors::AppResult;
use clap::{Parser, Subcommand};

pub mod commands;

/// LAVA token burn, supply and rewards statistics
#[derive(Parser)]
#[command(name = "lava-burn-stats")]
#[command(about = "LAVA token burn, supply and rewards statistics")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show the derived burn history (table, JSON points or stacked bar chart)
    BurnHistory(commands::burn::BurnHistoryCommand),
    /// Show headline burn figures and the moving-average burn
    BurnSummary(commands::burn::BurnSummaryCommand),
    /// Show the circulating / burned / locked supply split
    Supply(commands::supply::SupplyCommand),
    /// Show reward totals and one sorted reward category
    Rewards(commands::rewards::RewardsCommand),
    /// Click a burn table column header and show the re-sorted table
    SortBurnTable(commands::burn::SortBurnTableCommand),
}

pub async fn run() -> AppResult<()> {
    // Uses RUST_LOG environment variable (defaults to "error" if not set)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::BurnHistory(command) => command.run(),
        Commands::BurnSummary(command) => command.run(),
        Commands::Supply(command) => command.run().await,
        Commands::Rewards(command) => command.run().await,
        Commands::SortBurnTable(command) => command.run(),
    }
}
