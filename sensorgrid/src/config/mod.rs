//! Configuration file management.
//!
//! Settings live in an INI file at `~/.config/sensorgrid/config.ini` (or the
//! platform equivalent). A missing file means defaults; CLI arguments
//! override whatever the file says.
//!
//! ```ini
//! [server]
//! bind = 127.0.0.1:8080
//!
//! [registry]
//! seed = true
//!
//! [logging]
//! level = info
//! directory = /var/log/sensorgrid
//! ```

mod file;
mod keys;

pub use file::{
    config_directory, config_file_path, ConfigFile, ConfigFileError, LoggingSettings,
    RegistrySettings, ServerSettings, DEFAULT_BIND, DEFAULT_LOG_LEVEL,
};
pub use keys::{ConfigKey, ConfigKeyError};
