// Waybill - Order Fulfillment Export and Delivery Engine
// Copyright (c) 2025 Waybill Contributors
// Licensed under the MIT License

//! Logging and observability
//!
//! Structured logging built on `tracing`:
//! - console output with an env-filterable level
//! - optional JSON file logs with daily or hourly rotation
//!
//! # Example
//!
//! ```no_run
//! use waybill::logging::init_logging;
//! use waybill::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! tracing::warn!(order_code = "ORD-1", "Transfer failed");
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};
