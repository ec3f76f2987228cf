// Waybill - Order Fulfillment Export and Delivery Engine
// Copyright (c) 2025 Waybill Contributors
// Licensed under the MIT License

//! Secure credential handling using the secrecy crate
//!
//! Transfer endpoint passwords live in memory for the lifetime of a
//! delivery attempt. The `secrecy` wrapper zeroes that memory on drop and
//! redacts Debug output, so credentials cannot leak through logs or crash
//! reports. Access requires an explicit `expose_secret()` call at the one
//! place that opens the transfer session.

use secrecy::{CloneableSecret, DebugSecret, Secret, SerializableSecret};
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

/// Newtype wrapper for String that implements the traits `Secret` requires
#[derive(Clone, Debug, Serialize, Deserialize, Zeroize)]
#[zeroize(drop)]
pub struct SecretValue(String);

impl CloneableSecret for SecretValue {}
impl DebugSecret for SecretValue {}
impl SerializableSecret for SecretValue {}

impl From<String> for SecretValue {
    fn from(s: String) -> Self {
        SecretValue(s)
    }
}

impl From<&str> for SecretValue {
    fn from(s: &str) -> Self {
        SecretValue(s.to_string())
    }
}

impl AsRef<str> for SecretValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl SecretValue {
    /// Check if the secret value is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the secret as a plain string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A string credential with redacted Debug output and zeroize-on-drop
pub type SecretString = Secret<SecretValue>;

/// Wraps a plain string as a [`SecretString`]
pub fn secret_string(value: impl Into<String>) -> SecretString {
    Secret::new(SecretValue::from(value.into()))
}
