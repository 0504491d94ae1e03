//! Serve command - run the sensor registry HTTP API.

use sensorgrid::app::{AppConfig, SensorGridApp};
use sensorgrid::config::ConfigFile;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the serve command.
pub struct ServeArgs {
    pub bind: Option<String>,
    pub no_seed: bool,
}

/// Run the serve command.
pub fn run(args: ServeArgs) -> Result<(), CliError> {
    let runner = CliRunner::new()?;
    runner.log_startup("serve");

    let app_config = resolve_app_config(&args, runner.config());

    println!("SensorGrid v{}", sensorgrid::VERSION);
    println!("==================");
    println!();
    println!("Listen:   {}", app_config.bind);
    println!(
        "Registry: {}",
        if app_config.seed {
            "seeded with reference sensors"
        } else {
            "empty"
        }
    );
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    // Set up signal handler for graceful shutdown
    let shutdown = CancellationToken::new();
    let shutdown_clone = shutdown.clone();

    ctrlc::set_handler(move || {
        println!();
        println!("Received shutdown signal, stopping...");
        shutdown_clone.cancel();
    })
    .map_err(|e| CliError::Config(format!("Failed to set signal handler: {}", e)))?;

    SensorGridApp::run_blocking(app_config, shutdown)?;

    info!("Shutdown complete");
    println!("Server stopped.");
    Ok(())
}

/// Merge CLI arguments over the configuration file: CLI > config.
fn resolve_app_config(args: &ServeArgs, config: &ConfigFile) -> AppConfig {
    let mut app_config = AppConfig::from_config_file(config);
    if let Some(ref bind) = args.bind {
        app_config = app_config.with_bind(bind.clone());
    }
    if args.no_seed {
        app_config = app_config.with_seed(false);
    }
    app_config
}
