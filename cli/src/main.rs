//! User Contracts - application entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use common::ToolConfig;
use contracts_cli::Cli;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = ToolConfig::from_env();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose, &config);
    tracing::debug!(?config, "Configuration loaded");

    match contracts_cli::run(cli, &config) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::debug!(code = e.code(), "Command failed: {}", e);
            eprintln!("error: {}", e.user_message());
            std::process::exit(e.exit_code());
        }
    }
}

/// Initialize tracing subscriber on stderr so stdout stays clean JSON
fn init_tracing(verbose: bool, config: &ToolConfig) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        config.log_level.clone()
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
