use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Rewards-pools aggregator endpoint used by the landing page
pub const DEFAULT_POOLS_URL: &str =
    "https://mcyumuxznb.execute-api.us-east-1.amazonaws.com/api/home/?format=json";

/// Application configuration loaded from config.toml or environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub aggregator: AggregatorConfig,
    pub paths: PathsConfig,
    pub display: DisplayConfig,
}

/// Backend (jsinfobe) REST configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL; empty means "not configured"
    pub jsinfobe_rest_url: String,
    pub timeout_ms: u64,
    pub cache_ttl_seconds: u64,
    pub retry_count: usize,
    pub initial_backoff_ms: u64,
    pub backoff_multiplier: f64,
    pub max_backoff_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            jsinfobe_rest_url: String::new(),
            timeout_ms: 30_000,
            cache_ttl_seconds: 10,
            retry_count: 3,
            initial_backoff_ms: 200,
            backoff_multiplier: 2.0,
            max_backoff_seconds: 5,
        }
    }
}

impl ApiConfig {
    /// Whether a backend base URL has been provided
    pub fn is_configured(&self) -> bool {
        !self.jsinfobe_rest_url.trim().is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregatorConfig {
    pub pools_url: String,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            pools_url: DEFAULT_POOLS_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    pub burn_history: PathBuf,
    pub rewards: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            burn_history: PathBuf::from("./data/burn_history.json"),
            rewards: PathBuf::from("./data/all_rewards.json"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub moving_average_window: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            moving_average_window: 7,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            aggregator: AggregatorConfig::default(),
            paths: PathsConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from config.toml file and environment variables
    /// Environment variables take precedence over file configuration
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = AppConfig::default();
        let config = Config::builder()
            .set_default("api.jsinfobe_rest_url", defaults.api.jsinfobe_rest_url)?
            .set_default("api.timeout_ms", defaults.api.timeout_ms)?
            .set_default("api.cache_ttl_seconds", defaults.api.cache_ttl_seconds)?
            .set_default("api.retry_count", defaults.api.retry_count as i64)?
            .set_default("api.initial_backoff_ms", defaults.api.initial_backoff_ms)?
            .set_default("api.backoff_multiplier", defaults.api.backoff_multiplier)?
            .set_default("api.max_backoff_seconds", defaults.api.max_backoff_seconds)?
            .set_default("aggregator.pools_url", defaults.aggregator.pools_url)?
            .set_default(
                "paths.burn_history",
                defaults.paths.burn_history.to_string_lossy().to_string(),
            )?
            .set_default(
                "paths.rewards",
                defaults.paths.rewards.to_string_lossy().to_string(),
            )?
            .set_default(
                "display.moving_average_window",
                defaults.display.moving_average_window as i64,
            )?
            // Load from config.toml if it exists
            .add_source(File::with_name("config").required(false))
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;
        app_config.apply_env_overrides()?;
        Ok(app_config)
    }

    /// Get default config values for CLI argument defaults
    pub fn get_defaults() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                tracing::debug!("Falling back to built-in configuration: {}", e);
                Self::default()
            }
        }
    }

    /// Apply the environment variables the dashboard has always honoured
    ///
    /// `NEXT_PUBLIC_JSINFOBE_REST_URL` is accepted as a fallback spelling of
    /// `JSINFOBE_REST_URL`.
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(url) = first_non_empty_env(&["JSINFOBE_REST_URL", "NEXT_PUBLIC_JSINFOBE_REST_URL"])
        {
            self.api.jsinfobe_rest_url = url;
        }
        if let Some(v) = first_non_empty_env(&["JSINFOBE_TIMEOUT_MS"]) {
            self.api.timeout_ms = parse_env("JSINFOBE_TIMEOUT_MS", &v)?;
        }
        if let Some(v) = first_non_empty_env(&["JSINFOBE_CACHE_TTL"]) {
            self.api.cache_ttl_seconds = parse_env("JSINFOBE_CACHE_TTL", &v)?;
        }
        if let Some(v) = first_non_empty_env(&["JSINFOBE_RETRY_COUNT"]) {
            self.api.retry_count = parse_env("JSINFOBE_RETRY_COUNT", &v)?;
        }
        if let Some(v) = first_non_empty_env(&["BURN_HISTORY_PATH"]) {
            self.paths.burn_history = PathBuf::from(v);
        }
        if let Some(v) = first_non_empty_env(&["REWARDS_DATA_PATH"]) {
            self.paths.rewards = PathBuf::from(v);
        }
        Ok(())
    }
}

fn first_non_empty_env(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| env::var(name).ok())
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}

fn parse_env<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value
        .parse::<T>()
        .map_err(|_| ConfigError::Message(format!("{} has an invalid value: {}", name, value)))
}
