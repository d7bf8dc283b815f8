use thiserror::Error;

/// Application-wide error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx answer. The response body is never kept.
    #[error("Generation service returned {status}")]
    GeneratorStatus { status: u16 },

    #[error("Malformed wallet record: {0}")]
    MalformedRecord(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        Self::MalformedRecord(msg.into())
    }

    pub fn clipboard<S: Into<String>>(msg: S) -> Self {
        Self::Clipboard(msg.into())
    }

    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::Internal(msg.into())
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
