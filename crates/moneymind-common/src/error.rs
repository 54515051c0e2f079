//! Error types and utilities for MoneyMind.

use thiserror::Error;

/// Result type alias for MoneyMind operations
pub type Result<T> = std::result::Result<T, MoneyMindError>;

/// Main error type for MoneyMind operations
#[derive(Error, Debug)]
pub enum MoneyMindError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable description.
        message: String,
        /// Underlying cause, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Chart view construction errors
    #[error("Chart error: {message}")]
    Chart {
        /// Name of the chart being built, if known.
        chart: Option<String>,
        /// Human readable description.
        message: String,
        /// Underlying cause, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Validation errors for record data
    #[error("Validation error: {message}")]
    Validation {
        /// Human readable description.
        message: String,
        /// Field or accessor key involved, if known.
        field: Option<String>,
    },
}

impl MoneyMindError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Wrap an error raised while building the named chart
    pub fn chart_with_source(
        chart: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        let chart = chart.into();
        Self::Chart {
            message: format!("failed to build '{chart}'"),
            chart: Some(chart),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Field name attached to a validation error.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_error_creation() {
        let config_error = MoneyMindError::config("config issue");
        assert!(config_error.to_string().contains("Configuration error"));
        assert!(config_error.to_string().contains("config issue"));
        assert!(config_error.source().is_none());

        let validation_error = MoneyMindError::validation_field("missing value", "relevance");
        assert!(validation_error.to_string().contains("Validation error"));
        assert_eq!(validation_error.field(), Some("relevance"));
        assert!(config_error.field().is_none());
    }

    #[test]
    fn test_chart_error_keeps_source() {
        let inner = MoneyMindError::validation_field("value is NaN", "value");
        let wrapped = MoneyMindError::chart_with_source("overview_tools", inner);

        assert_eq!(
            wrapped.to_string(),
            "Chart error: failed to build 'overview_tools'"
        );
        assert!(wrapped.field().is_none());
        match &wrapped {
            MoneyMindError::Chart { chart, .. } => {
                assert_eq!(chart.as_deref(), Some("overview_tools"));
            }
            other => panic!("expected chart error, got {other}"),
        }
        let source = wrapped.source().expect("chart error should carry its cause");
        assert!(source.to_string().contains("value is NaN"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: MoneyMindError = io_error.into();

        assert!(error.to_string().contains("I/O error"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_error_chain_preservation() {
        let root_error = io::Error::new(io::ErrorKind::NotFound, "Root cause");
        let middle_error = MoneyMindError::config_with_source("Middle layer", root_error);
        let top_error = MoneyMindError::chart_with_source("segment_shares", middle_error);

        let mut current_error: &dyn std::error::Error = &top_error;
        let mut error_count = 0;
        while let Some(source) = current_error.source() {
            current_error = source;
            error_count += 1;
        }

        assert_eq!(error_count, 2);
        assert_eq!(current_error.to_string(), "Root cause");
    }
}
