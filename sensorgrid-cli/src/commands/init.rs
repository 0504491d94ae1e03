//! Init command - initialize configuration file.

use std::path::Path;

use sensorgrid::config::{config_file_path, ConfigFile};

use crate::error::CliError;

/// Run the init command.
pub fn run() -> Result<(), CliError> {
    let path = config_file_path();
    let created = init_at(&path)?;

    if created {
        println!("Created configuration file: {}", path.display());
    } else {
        println!("Configuration file already exists: {}", path.display());
    }
    println!();
    println!("Edit this file to customize SensorGrid settings.");
    println!("CLI arguments override config file values when specified.");
    Ok(())
}

/// Write defaults to `path` unless a file is already there.
fn init_at(path: &Path) -> Result<bool, CliError> {
    if path.exists() {
        return Ok(false);
    }
    ConfigFile::default().save_to(path)?;
    Ok(true)
}
