//! Application-wide error types using thiserror.

use moneymind_common::MoneyMindError;
use moneymind_config::ConfigError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Dashboard views could not be built.
    #[error("Dashboard error: {0}")]
    Dashboard(#[from] MoneyMindError),

    /// Report could not be serialized.
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

/// Result type for the application.
pub type AppResult<T> = Result<T, AppError>;
