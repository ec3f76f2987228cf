// Waybill - Order Fulfillment Export and Delivery Engine
// Copyright (c) 2025 Waybill Contributors
// Licensed under the MIT License

use clap::Parser;
use std::process;
use waybill::cli::{Cli, Commands};
use waybill::config::LoggingConfig;
use waybill::logging::init_logging;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    // This is optional - if .env doesn't exist, it's silently ignored
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Console-only logging for the CLI; file logging is driven by the
    // config file in long-running deployments
    let log_level = cli.log_level.as_deref().unwrap_or("info");
    let logging_config = LoggingConfig::default();
    let _guard = match init_logging(log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "Waybill starting");

    let result = match &cli.command {
        Commands::Export(args) => args.execute(&cli.config).await,
        Commands::Deliver(args) => args.execute(&cli.config).await,
        Commands::ValidateConfig(args) => args.execute(&cli.config).await,
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
