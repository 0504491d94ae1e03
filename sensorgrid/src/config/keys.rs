//! Typed configuration keys for `config get/set/list`.

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use super::file::{parse_bool, ConfigFile, ConfigFileError};

/// Errors from parsing a key name or setting a value.
#[derive(Debug, Error)]
pub enum ConfigKeyError {
    /// Not a known `section.key` name
    #[error("unknown configuration key '{0}'")]
    UnknownKey(String),

    /// Value rejected by the key's validation
    #[error(transparent)]
    InvalidValue(#[from] ConfigFileError),
}

/// Every settable configuration key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    ServerBind,
    RegistrySeed,
    LoggingLevel,
    LoggingDirectory,
}

impl ConfigKey {
    /// All keys, in display order.
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::ServerBind,
            ConfigKey::RegistrySeed,
            ConfigKey::LoggingLevel,
            ConfigKey::LoggingDirectory,
        ]
    }

    /// Full dotted name, e.g. `server.bind`.
    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::ServerBind => "server.bind",
            ConfigKey::RegistrySeed => "registry.seed",
            ConfigKey::LoggingLevel => "logging.level",
            ConfigKey::LoggingDirectory => "logging.directory",
        }
    }

    /// INI section the key lives in.
    pub fn section(&self) -> &'static str {
        self.split().0
    }

    /// Key name within its section.
    pub fn key_name(&self) -> &'static str {
        self.split().1
    }

    fn split(&self) -> (&'static str, &'static str) {
        self.name().split_once('.').unwrap_or(("", self.name()))
    }

    /// Current value as a string; empty when unset.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::ServerBind => config.server.bind.clone(),
            ConfigKey::RegistrySeed => config.registry.seed.to_string(),
            ConfigKey::LoggingLevel => config.logging.level.clone(),
            ConfigKey::LoggingDirectory => config
                .logging
                .directory
                .as_ref()
                .map(|d| d.to_string_lossy().to_string())
                .unwrap_or_default(),
        }
    }

    /// Validate and store `value`. An empty directory clears it.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigKeyError> {
        let value = value.trim();
        match self {
            ConfigKey::ServerBind => {
                validate_bind(value).map_err(|reason| self.invalid(value, reason))?;
                config.server.bind = value.to_string();
            }
            ConfigKey::RegistrySeed => {
                config.registry.seed = parse_bool(self.name(), value)?;
            }
            ConfigKey::LoggingLevel => {
                if value.is_empty() {
                    return Err(self.invalid(value, "level must not be empty").into());
                }
                config.logging.level = value.to_string();
            }
            ConfigKey::LoggingDirectory => {
                config.logging.directory = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
        }
        Ok(())
    }

    fn invalid(&self, value: &str, reason: &str) -> ConfigFileError {
        ConfigFileError::InvalidValue {
            key: self.name().to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Check a `host:port` listen address without resolving the host.
fn validate_bind(value: &str) -> Result<(), &'static str> {
    let (host, port) = value.rsplit_once(':').ok_or("expected host:port")?;
    if host.is_empty() {
        return Err("host must not be empty");
    }
    u16::from_str(port).map_err(|_| "port must be a number between 0 and 65535")?;
    Ok(())
}

impl FromStr for ConfigKey {
    type Err = ConfigKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ConfigKey::all()
            .iter()
            .copied()
            .find(|key| key.name() == wanted)
            .ok_or_else(|| ConfigKeyError::UnknownKey(s.to_string()))
    }
}
