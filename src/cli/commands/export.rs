// Waybill - Order Fulfillment Export and Delivery Engine
// Copyright (c) 2025 Waybill Contributors
// Licensed under the MIT License

//! Export command implementation
//!
//! Renders one order through one file template and writes the delimited
//! artifact to a file or stdout.

use crate::adapters::reference::{
    HttpReferenceDataClient, InMemoryReferenceData, ReferenceDataLookup,
};
use crate::config::load_config;
use crate::core::export::{validate_template, ExportEngine};
use crate::domain::order::Order;
use crate::domain::template::FileTemplate;
use clap::Args;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Path to the order JSON file
    #[arg(long)]
    pub order: PathBuf,

    /// Path to the file template JSON file
    #[arg(long)]
    pub template: PathBuf,

    /// Output file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Resolve related entities from an empty in-memory store instead of
    /// the configured reference data service
    #[arg(long)]
    pub offline: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = load_config(config_path)?;

        let order: Order = read_json(&self.order)?;
        let template: FileTemplate = read_json(&self.template)?;
        validate_template(&template)?;

        let lookup: Arc<dyn ReferenceDataLookup> = if self.offline {
            Arc::new(InMemoryReferenceData::new())
        } else {
            Arc::new(HttpReferenceDataClient::new(&config.reference)?)
        };

        let engine = ExportEngine::new(lookup, &config.export);
        let bytes = engine.export(&order, &template).await?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, &bytes)?;
                tracing::info!(
                    order_code = %order.order_code,
                    path = %path.display(),
                    bytes = bytes.len(),
                    "Wrote export file"
                );
            }
            None => {
                std::io::stdout().write_all(&bytes)?;
            }
        }

        Ok(0)
    }
}

pub(crate) fn read_json<T: serde::de::DeserializeOwned>(path: &PathBuf) -> anyhow::Result<T> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("failed to parse {}: {e}", path.display()))
}
