// Waybill - Order Fulfillment Export and Delivery Engine
// Copyright (c) 2025 Waybill Contributors
// Licensed under the MIT License

//! # Waybill - Order Fulfillment Export and Delivery
//!
//! Waybill turns a fulfillment order into a flat delimited export record
//! using a user-configurable column mapping, and delivers that artifact to
//! an external trading-partner system over a pluggable transport, tracking
//! the delivery outcome in the order's lifecycle status.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Rendering** orders through file templates (dynamic column mapping
//!   with cross-entity lookups and per-column date formatting)
//! - **Storing** the produced artifact in a per-facility local directory
//! - **Sending** the artifact over FTP-family transports
//! - **Tracking** delivery outcome as order status, with a manual retry
//!
//! ## Architecture
//!
//! Waybill follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (export engine, delivery state machine)
//! - [`adapters`] - Collaborator boundaries (persistence, reference data,
//!   transports)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use waybill::adapters::reference::HttpReferenceDataClient;
//! use waybill::config::load_config;
//! use waybill::core::export::ExportEngine;
//!
//! # async fn example(order: waybill::domain::Order, template: waybill::domain::FileTemplate)
//! # -> waybill::domain::Result<()> {
//! let config = load_config("waybill.toml")?;
//!
//! let lookup = Arc::new(HttpReferenceDataClient::new(&config.reference)?);
//! let engine = ExportEngine::new(lookup, &config.export);
//!
//! let bytes = engine.export(&order, &template).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Delivery lifecycle
//!
//! The [`core::delivery::DeliveryCoordinator`] evaluates one transition
//! per order creation or retry:
//!
//! - no destination configured: `TRANSFER_FAILED`
//! - FTP-family destination: `IN_ROUTE`, store locally, attempt one send;
//!   a failed send becomes `TRANSFER_FAILED` with the artifact retained
//! - local destination: `READY_TO_PACK`, store locally only
//!
//! A failed transfer is retried only through the explicit
//! [`retry`](core::delivery::DeliveryCoordinator::retry) operation.
//!
//! ## Error Handling
//!
//! All fallible operations return [`domain::Result`] with the
//! [`domain::WaybillError`] error type:
//!
//! ```rust,no_run
//! use waybill::domain::Result;
//!
//! fn example() -> Result<()> {
//!     let config = waybill::config::load_config("waybill.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Waybill uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! tracing::info!(order_code = "ORD-1", "Starting delivery");
//! tracing::warn!(order_code = "ORD-1", "Transfer failed");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
