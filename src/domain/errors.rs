// Waybill - Order Fulfillment Export and Delivery Engine
// Copyright (c) 2025 Waybill Contributors
// Licensed under the MIT License

//! Domain error types
//!
//! This module defines the error hierarchy for Waybill. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;
use uuid::Uuid;

use crate::domain::order::OrderStatus;

/// Main Waybill error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum WaybillError {
    /// Configuration-related errors (bad config file, unknown key path,
    /// missing template, no transfer destination configured)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Reference data lookup errors
    #[error("Reference data error: {0}")]
    Reference(#[from] ReferenceError),

    /// Artifact storage errors, carrying the underlying I/O cause
    #[error("Storage error: {message}")]
    Storage {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Transport send errors
    ///
    /// These never escape `DeliveryCoordinator::deliver` - the coordinator
    /// converts them into the `TransferFailed` order status.
    #[error("Transfer error: {0}")]
    Transfer(#[from] TransferError),

    /// Retry requested for an order that is not in `TransferFailed`
    #[error("Order cannot be retried from status {actual}")]
    InvalidStatusForRetry { actual: OrderStatus },

    /// Order lookup by id failed
    #[error("Order not found: {0}")]
    OrderNotFound(Uuid),

    /// Export requested with a kind other than the delimited-text kind
    #[error("Export type not allowed: {0}")]
    UnsupportedExportType(String),

    /// A second TransferProperties record for the same facility
    #[error("Transfer properties already exist for facility {0}")]
    DuplicateTransferProperties(Uuid),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors outside of artifact storage
    #[error("I/O error: {0}")]
    Io(String),
}

/// Reference-data-specific errors
///
/// Errors that occur when resolving related entities through the
/// reference data service. These errors don't expose the HTTP client types.
#[derive(Debug, Error)]
pub enum ReferenceError {
    /// Failed to connect to the reference data service
    #[error("Failed to connect to reference data service: {0}")]
    ConnectionFailed(String),

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Response body could not be interpreted
    #[error("Invalid response from reference data service: {0}")]
    InvalidResponse(String),

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Client error (4xx other than 404)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Request timeout
    #[error("Request timeout: {0}")]
    Timeout(String),
}

/// Transport-send-specific errors
///
/// A single failed send attempt yields exactly one of these; there is no
/// internal retry loop. The coordinator maps any of them to the
/// `TransferFailed` status transition.
#[derive(Debug, Error)]
pub enum TransferError {
    /// Failed to open the control connection
    #[error("Failed to connect to {host}:{port}: {message}")]
    ConnectionFailed {
        host: String,
        port: u16,
        message: String,
    },

    /// Login rejected by the remote server
    #[error("Login failed for user {username}: {message}")]
    LoginFailed { username: String, message: String },

    /// Upload failed after the session was established
    #[error("Upload of {file_name} failed: {message}")]
    UploadFailed { file_name: String, message: String },

    /// The configured protocol has no bundled channel implementation
    #[error("Protocol {0} is not supported by this delivery channel")]
    UnsupportedProtocol(String),

    /// The local artifact to send was missing or unreadable
    #[error("Local artifact unavailable: {0}")]
    ArtifactUnavailable(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for WaybillError {
    fn from(err: std::io::Error) -> Self {
        WaybillError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for WaybillError {
    fn from(err: serde_json::Error) -> Self {
        WaybillError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for WaybillError {
    fn from(err: toml::de::Error) -> Self {
        WaybillError::Configuration(format!("TOML parse error: {err}"))
    }
}

impl WaybillError {
    /// Wraps an I/O error as a storage failure with context
    pub fn storage(message: impl Into<String>, source: std::io::Error) -> Self {
        WaybillError::Storage {
            message: message.into(),
            source,
        }
    }
}
