//! PropDocs shell entry point.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use propdocs_core::config::AppConfig;
use propdocs_core::error::AppError;
use propdocs_core::traits::Notifier;
use propdocs_service::{DocumentManager, LogNotifier, MemoryNotifier, NoopNotifier};

mod commands;
mod output;
mod session;

use commands::Cli;
use session::Shell;

fn main() {
    let cli = Cli::parse();

    let mut config = match load_configuration(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };
    if cli.empty {
        config.store.seed_demo_data = false;
    }

    init_logging(&config);

    if let Err(e) = run(&cli, &config) {
        tracing::error!(error = %e, "Shell error");
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Load configuration from the config directory and environment
fn load_configuration(cli: &Cli) -> Result<AppConfig, AppError> {
    let env = std::env::var("PROPDOCS_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load_from(&cli.config_dir, &env)
}

/// Initialize tracing/logging
///
/// Logs go to stderr so they never interleave with command output.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

/// Build the document manager and run the shell
fn run(cli: &Cli, config: &AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting PropDocs v{}", env!("CARGO_PKG_VERSION"));

    let toasts = config
        .notifications
        .enabled
        .then(|| Arc::new(MemoryNotifier::new()));
    let notifier: Arc<dyn Notifier> = match &toasts {
        Some(memory) => memory.clone(),
        None if config.notifications.log => Arc::new(LogNotifier),
        None => Arc::new(NoopNotifier),
    };

    let manager = DocumentManager::from_config(config, notifier)?;
    let mut shell = Shell::new(manager, toasts, cli.format);

    match &cli.script {
        Some(path) => shell.run_script(path),
        None => shell.run_interactive(),
    }
}
