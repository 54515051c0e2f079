//! Configuration loading from YAML, TOML or JSON with environment overrides.

use crate::schema::DashboardConfig;
use crate::validator::ConfigValidator;
use moneymind_common::{LogFormat, MoneyMindError};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "MONEYMIND_CONFIG_PATH";
/// Environment variable overriding `logging.level`.
pub const LOG_LEVEL_ENV: &str = "MONEYMIND_LOG_LEVEL";
/// Environment variable overriding `logging.format`.
pub const LOG_FORMAT_ENV: &str = "MONEYMIND_LOG_FORMAT";

/// Files tried, in order, when no path is given.
pub const DEFAULT_CONFIG_FILES: [&str; 4] = [
    "moneymind.yaml",
    "moneymind.yml",
    "moneymind.toml",
    "moneymind.json",
];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file '{path}': {source}")]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying cause.
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("Failed to parse TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// File extension is not one of yaml, yml, toml, json
    #[error("Unsupported configuration format for '{0}'")]
    UnsupportedFormat(PathBuf),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParse {
        /// Variable name.
        var: String,
        /// Underlying cause.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Configuration validation error
    #[error("Configuration validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}

impl From<ConfigError> for MoneyMindError {
    fn from(err: ConfigError) -> Self {
        Self::config_with_source("failed to load dashboard configuration", err)
    }
}

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.yaml` or `.yml`
    Yaml,
    /// `.toml`
    Toml,
    /// `.json`
    Json,
}

impl ConfigFormat {
    /// Picks the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedFormat`] for any other extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Parses a configuration document in this format.
    ///
    /// # Errors
    ///
    /// Returns the parser's error for malformed documents.
    pub fn parse(self, content: &str) -> Result<DashboardConfig, ConfigError> {
        let config = match self {
            Self::Yaml => serde_yaml::from_str(content)?,
            Self::Toml => toml::from_str(content)?,
            Self::Json => serde_json::from_str(content)?,
        };
        Ok(config)
    }
}

/// Configuration loader for the dashboard.
pub struct ConfigLoader {
    path: Option<PathBuf>,
    log_level: Option<String>,
}

impl ConfigLoader {
    /// Creates a loader reading the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            log_level: None,
        }
    }

    /// Creates a loader that uses `MONEYMIND_CONFIG_PATH` or the first
    /// existing file of [`DEFAULT_CONFIG_FILES`], falling back to defaults.
    pub fn discover() -> Self {
        let path = std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .or_else(|| {
                DEFAULT_CONFIG_FILES
                    .iter()
                    .map(PathBuf::from)
                    .find(|candidate| candidate.exists())
            });
        Self {
            path,
            log_level: None,
        }
    }

    /// Sets a log level that takes precedence over the file and the
    /// environment. It is validated like any other level.
    #[must_use]
    pub fn with_log_level(mut self, level: Option<String>) -> Self {
        self.log_level = level;
        self
    }

    /// File this loader reads, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Loads, overrides from the process environment and then from
    /// [`ConfigLoader::with_log_level`], and validates.
    ///
    /// # Errors
    ///
    /// Fails on unreadable or malformed files, bad environment values and
    /// validation failures.
    pub async fn load(&self) -> Result<DashboardConfig, ConfigError> {
        let mut config = match &self.path {
            Some(path) => Self::load_file(path).await?,
            None => {
                info!("No configuration file found, using built-in survey dataset");
                DashboardConfig::default()
            }
        };

        Self::apply_overrides(&mut config, |var| std::env::var(var).ok())?;
        if let Some(level) = &self.log_level {
            config.logging.level.clone_from(level);
        }
        ConfigValidator::validate(&config)?;

        debug!(
            segments = config.dataset.segments.len(),
            level = %config.logging.level,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Reads and parses one file without overrides or validation.
    ///
    /// # Errors
    ///
    /// Fails on unreadable files, unknown extensions and parse errors.
    pub async fn load_file(path: &Path) -> Result<DashboardConfig, ConfigError> {
        let format = ConfigFormat::from_path(path)?;
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        info!(path = %path.display(), ?format, "Loading configuration file");
        format.parse(&content)
    }

    /// Applies `MONEYMIND_*` overrides using `lookup` to read variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EnvParse`] for an unknown log format.
    pub fn apply_overrides<F>(config: &mut DashboardConfig, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(LOG_LEVEL_ENV) {
            config.logging.level = level;
        }

        if let Some(format) = lookup(LOG_FORMAT_ENV) {
            config.logging.format =
                format
                    .parse::<LogFormat>()
                    .map_err(|e| ConfigError::EnvParse {
                        var: LOG_FORMAT_ENV.to_string(),
                        source: Box::new(e),
                    })?;
        }

        Ok(())
    }
}
