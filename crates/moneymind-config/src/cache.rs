//! Thread-safe configuration snapshots with arc-swap for lock-free reads.

use crate::schema::DashboardConfig;
use arc_swap::ArcSwap;
use std::sync::Arc;

/// Holds the active configuration.
///
/// Readers get an `Arc` snapshot that stays valid even if the cache is
/// replaced while they work; the configuration itself is never mutated.
pub struct ConfigCache {
    config: ArcSwap<DashboardConfig>,
}

impl ConfigCache {
    /// Creates a new configuration cache with the given initial configuration.
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config: ArcSwap::from_pointee(config),
        }
    }

    /// Gets the current configuration.
    pub fn get(&self) -> Arc<DashboardConfig> {
        self.config.load_full()
    }

    /// Replaces the configuration atomically.
    pub fn update(&self, config: DashboardConfig) {
        self.config.store(Arc::new(config));
    }
}

impl Default for ConfigCache {
    fn default() -> Self {
        Self::new(DashboardConfig::default())
    }
}
