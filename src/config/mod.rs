// Waybill - Order Fulfillment Export and Delivery Engine
// Copyright (c) 2025 Waybill Contributors
// Licensed under the MIT License

//! Configuration management
//!
//! Waybill is configured through a TOML file with `${VAR}` environment
//! substitution and `WAYBILL_*` environment overrides. See
//! [`load_config`] for the loading pipeline and [`WaybillConfig`] for the
//! schema.

pub mod loader;
pub mod schema;
pub mod secret;

pub use loader::load_config;
pub use schema::{
    ApplicationConfig, DeliveryConfig, ExportConfig, LoggingConfig, ReferenceConfig,
    WaybillConfig,
};
pub use secret::{secret_string, SecretString, SecretValue};
