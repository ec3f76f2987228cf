// Waybill - Order Fulfillment Export and Delivery Engine
// Copyright (c) 2025 Waybill Contributors
// Licensed under the MIT License

//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Waybill using clap.
//! Orders, templates and transfer properties are supplied as JSON files;
//! persistence is a collaborator of the library, not of the CLI.

pub mod commands;

use clap::{Parser, Subcommand};

/// Waybill - order fulfillment export and delivery
#[derive(Parser, Debug)]
#[command(name = "waybill")]
#[command(version, about, long_about = None)]
#[command(author = "Waybill Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "waybill.toml", env = "WAYBILL_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "WAYBILL_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render an order through a file template to a file or stdout
    Export(commands::export::ExportArgs),

    /// Run the delivery state machine for an order
    Deliver(commands::deliver::DeliverArgs),

    /// Validate the configuration file (and optionally a template)
    ValidateConfig(commands::validate::ValidateArgs),
}
