//! Application configuration for SensorGridApp.

use crate::config::{ConfigFile, DEFAULT_BIND};

/// Top-level configuration passed to `SensorGridApp::bind()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Listen address, `host:port`. Port 0 picks a free port.
    pub bind: String,

    /// Seed the registry with the reference sensors.
    pub seed: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            seed: true,
        }
    }
}

impl AppConfig {
    /// Create application config from the configuration file.
    pub fn from_config_file(config: &ConfigFile) -> Self {
        Self {
            bind: config.server.bind.clone(),
            seed: config.registry.seed,
        }
    }

    /// Set the listen address.
    pub fn with_bind(mut self, bind: impl Into<String>) -> Self {
        self.bind = bind.into();
        self
    }

    /// Enable or disable seeding.
    pub fn with_seed(mut self, seed: bool) -> Self {
        self.seed = seed;
        self
    }
}
