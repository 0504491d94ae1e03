//! Shared setup for commands that run the service.

use sensorgrid::config::ConfigFile;
use sensorgrid::logging::{init_logging, LoggingGuard};
use tracing::info;

use crate::error::CliError;

/// Loaded configuration plus an installed logger.
pub struct CliRunner {
    config: ConfigFile,
    _logging: LoggingGuard,
}

impl CliRunner {
    /// Load the config file and initialize logging from it.
    pub fn new() -> Result<Self, CliError> {
        let config = ConfigFile::load()?;
        let logging = init_logging(&config.logging)?;
        Ok(Self {
            config,
            _logging: logging,
        })
    }

    /// The loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log a startup line for `command`.
    pub fn log_startup(&self, command: &str) {
        info!(
            version = sensorgrid::VERSION,
            command,
            config = %sensorgrid::config::config_file_path().display(),
            "SensorGrid starting"
        );
    }
}
