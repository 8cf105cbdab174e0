//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// A task payload could not be decoded.
    #[error("Invalid payload at line {line}: {message}")]
    InvalidPayload {
        /// 1-based input line of the offending payload.
        line: usize,
        /// Decoder message.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidPayload { .. } => 65,
            Self::Config(_) => 78,
            Self::Io(_) => 74,
            Self::Internal(_) => 70,
        }
    }

    /// Returns the error code for machine-readable output.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPayload { .. } => "INVALID_PAYLOAD",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
