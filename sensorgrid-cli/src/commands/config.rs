//! `sensorgrid config` - inspect and edit `config.ini`.
//!
//! Every subcommand works against an explicit file path and returns the text
//! to print, so the same code paths run against temporary files in tests.

use std::fmt::Write as _;
use std::path::Path;

use clap::Subcommand;
use sensorgrid::config::{config_file_path, ConfigFile, ConfigKey};

use crate::error::CliError;

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print one value, e.g. `sensorgrid config get server.bind`
    Get { key: String },

    /// Validate and store one value, e.g. `sensorgrid config set registry.seed false`
    Set { key: String, value: String },

    /// Print every key grouped by section
    List,

    /// Print where the configuration file lives
    Path,
}

pub fn run(command: ConfigCommands) -> Result<(), CliError> {
    let output = execute(command, &config_file_path())?;
    print!("{}", output);
    Ok(())
}

fn execute(command: ConfigCommands, path: &Path) -> Result<String, CliError> {
    match command {
        ConfigCommands::Get { key } => {
            let key = lookup(&key)?;
            let value = key.get(&ConfigFile::load_from(path)?);
            Ok(if value.is_empty() {
                "(not set)\n".to_string()
            } else {
                format!("{}\n", value)
            })
        }
        ConfigCommands::Set { key, value } => {
            let key = lookup(&key)?;
            let mut config = ConfigFile::load_from(path)?;
            key.set(&mut config, &value)?;
            config.save_to(path)?;
            Ok(format!("{} = {}\n", key.name(), key.get(&config)))
        }
        ConfigCommands::List => Ok(render_sections(&ConfigFile::load_from(path)?)),
        ConfigCommands::Path => Ok(format!("{}\n", path.display())),
    }
}

fn lookup(key: &str) -> Result<ConfigKey, CliError> {
    key.parse().map_err(|_| {
        CliError::Config(format!(
            "no setting named '{}' (run 'sensorgrid config list' for the full set)",
            key
        ))
    })
}

/// INI-like listing with unset values marked.
fn render_sections(config: &ConfigFile) -> String {
    let mut out = String::new();
    let mut section = None;

    for key in ConfigKey::all() {
        if section != Some(key.section()) {
            if section.is_some() {
                out.push('\n');
            }
            let _ = writeln!(out, "[{}]", key.section());
            section = Some(key.section());
        }

        let value = key.get(config);
        let shown = if value.is_empty() { "(not set)" } else { value.as_str() };
        let _ = writeln!(out, "  {} = {}", key.key_name(), shown);
    }

    out
}
