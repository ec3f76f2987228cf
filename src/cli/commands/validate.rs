// Waybill - Order Fulfillment Export and Delivery Engine
// Copyright (c) 2025 Waybill Contributors
// Licensed under the MIT License

//! Validate command implementation

use crate::cli::commands::export::read_json;
use crate::config::load_config;
use crate::core::export::validate_template;
use crate::domain::template::FileTemplate;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Also validate a file template JSON file against the known key paths
    #[arg(long)]
    pub template: Option<PathBuf>,
}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        match load_config(config_path) {
            Ok(_) => println!("Configuration is valid: {config_path}"),
            Err(e) => {
                eprintln!("Configuration is invalid: {e}");
                return Ok(2);
            }
        }

        if let Some(template_path) = &self.template {
            let template: FileTemplate = read_json(template_path)?;
            match validate_template(&template) {
                Ok(()) => println!("Template is valid: {}", template_path.display()),
                Err(e) => {
                    eprintln!("Template is invalid: {e}");
                    return Ok(2);
                }
            }
        }

        Ok(0)
    }
}
