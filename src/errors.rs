use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON document parsing/serialisation
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation/parsing
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Burn history record that violates the input contract
    #[error("Invalid burn history record at block {block}: {reason}")]
    InvalidRecord { block: u64, reason: String },

    /// Backend / aggregator API operations
    #[error("API error: {0}")]
    Api(#[from] ApiError),
}

/// Fetch-layer error types
#[derive(Error, Debug)]
pub enum ApiError {
    /// Endpoint base URL missing from configuration
    #[error("Not configured: {0}")]
    NotConfigured(String),

    /// Transport-level failure (DNS, connect, timeout, body read)
    #[error("Request failed: {endpoint} - {message}")]
    RequestFailed { endpoint: String, message: String },

    /// Non-success HTTP status
    #[error("HTTP {status} from {endpoint}")]
    HttpStatus { endpoint: String, status: u16 },

    /// Response body could not be interpreted
    #[error("Invalid response from {endpoint}: {message}")]
    InvalidResponse { endpoint: String, message: String },

    /// Retry limit exceeded for an endpoint
    #[error("Max retries exceeded: {endpoint} after {attempts} attempts")]
    MaxRetriesExceeded { endpoint: String, attempts: usize },
}

impl ApiError {
    /// Whether a retry could plausibly succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::RequestFailed { .. } => true,
            ApiError::HttpStatus { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

/// Result type for fetch-layer operations
pub type ApiResult<T> = Result<T, ApiError>;

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
