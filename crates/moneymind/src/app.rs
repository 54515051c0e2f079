//! Application state: the active configuration and the dashboard it yields.

use crate::error::AppResult;
use crate::report::Report;
use chrono::Utc;
use moneymind_charts::DashboardManager;
use moneymind_config::{ConfigCache, ConfigLoader, DashboardConfig};
use std::sync::Arc;
use tracing::{debug, info};

/// The MoneyMind application.
pub struct MoneyMindApp {
    config: ConfigCache,
}

impl MoneyMindApp {
    /// Creates the application with a loaded configuration.
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config: ConfigCache::new(config),
        }
    }

    /// Loads, overrides and validates the configuration, then creates the
    /// application.
    ///
    /// # Errors
    ///
    /// Returns the loader's error.
    pub async fn load(loader: &ConfigLoader) -> AppResult<Self> {
        let config = loader.load().await?;
        Ok(Self::new(config))
    }

    /// Current configuration snapshot.
    pub fn config(&self) -> Arc<DashboardConfig> {
        self.config.get()
    }

    /// Replaces the configuration; reports built afterwards use it.
    pub fn reload(&self, config: DashboardConfig) {
        info!(segments = config.dataset.segments.len(), "Configuration replaced");
        self.config.update(config);
    }

    /// Builds a report of every tab, or only of the tab with key `tab`.
    ///
    /// # Errors
    ///
    /// Fails on an unknown tab key or when a chart cannot be built.
    pub fn report(&self, tab: Option<&str>) -> AppResult<Report> {
        let config = self.config();
        let manager = DashboardManager::from_config(&config);

        let tabs = match tab {
            Some(key) => {
                debug!(tab = key, "Building single tab");
                vec![manager.build_tab(&config.dataset, key)?]
            }
            None => {
                let dashboard = manager.build_dashboard(&config.dataset)?;
                dashboard.tabs().cloned().collect()
            }
        };

        Ok(Report {
            generated_at: Utc::now(),
            tabs,
        })
    }
}

impl Default for MoneyMindApp {
    fn default() -> Self {
        Self::new(DashboardConfig::default())
    }
}
