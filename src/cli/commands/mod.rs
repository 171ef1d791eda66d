pub mod burn;
pub mod rewards;
pub mod supply;

use crate::analysis::OutputFormat;
use crate::errors::AppResult;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Parse output format string to OutputFormat enum
///
/// Unknown formats fall back to console output.
pub fn parse_format(format_str: &str) -> OutputFormat {
    format_str.parse().unwrap_or_else(|e| {
        warn!("{}, using console output", e);
        OutputFormat::Console
    })
}

/// Write output to file with safe directory creation
pub fn write_output_to_file(path: &Path, content: &str, description: &str) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    println!("{} written to: {}", description, path.display());
    Ok(())
}

/// Print formatted output, or write it to `output_path` when one was given
pub fn emit(formatted: &str, output_path: &Option<PathBuf>, description: &str) -> AppResult<()> {
    match output_path {
        Some(path) => write_output_to_file(path, formatted, description),
        None => {
            print!("{}", formatted);
            Ok(())
        }
    }
}

/// Input path from the CLI argument, else the configured default
pub fn resolve_input(cli_path: &Option<PathBuf>, configured: &Path) -> PathBuf {
    cli_path
        .clone()
        .unwrap_or_else(|| configured.to_path_buf())
}
