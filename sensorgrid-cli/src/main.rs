//! SensorGrid CLI - Command-line interface
//!
//! This binary wires the sensor registry HTTP API to a listening socket and
//! manages the configuration file.

mod commands;
mod error;
mod runner;

use clap::{Parser, Subcommand};

use commands::config::ConfigCommands;
use commands::serve::ServeArgs;
use error::CliError;

#[derive(Debug, Parser)]
#[command(name = "sensorgrid", version, about = "In-memory sensor registry over HTTP")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the HTTP API and serve until Ctrl+C
    Serve {
        /// Listen address (host:port), overrides server.bind
        #[arg(long)]
        bind: Option<String>,

        /// Start with an empty registry instead of the seed sensors
        #[arg(long)]
        no_seed: bool,
    },

    /// Write a default configuration file if none exists
    Init,

    /// View or modify configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), CliError> = match cli.command {
        Commands::Serve { bind, no_seed } => commands::serve::run(ServeArgs { bind, no_seed }),
        Commands::Init => commands::init::run(),
        Commands::Config { command } => commands::config::run(command),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
