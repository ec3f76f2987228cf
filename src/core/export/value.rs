// Waybill - Order Fulfillment Export and Delivery Engine
// Copyright (c) 2025 Waybill Contributors
// Licensed under the MIT License

//! Typed cell values produced by field resolution
//!
//! Every accessor in the resolver tables returns a [`FieldValue`], a closed
//! set of the types that actually occur in the order graph. This replaces
//! untyped reflective lookups: downstream formatting can match on the
//! variant instead of sniffing runtime types.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// A resolved cell value
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Permitted result of any lookup; renders as an empty cell
    Null,
    Text(String),
    Integer(i64),
    Decimal(f64),
    Boolean(bool),
    Uuid(Uuid),
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
}

impl FieldValue {
    /// True for the null value
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// The identifier carried by this value, when it is one
    pub fn as_uuid(&self) -> Option<Uuid> {
        match self {
            FieldValue::Uuid(id) => Some(*id),
            _ => None,
        }
    }

    /// Natural string form, used when no format pattern applies
    ///
    /// Dates render ISO (`%Y-%m-%d`), date-times render RFC 3339; both are
    /// stable across runs, which the export determinism guarantee relies on.
    pub fn natural(&self) -> String {
        match self {
            FieldValue::Null => String::new(),
            FieldValue::Text(s) => s.clone(),
            FieldValue::Integer(n) => n.to_string(),
            FieldValue::Decimal(d) => d.to_string(),
            FieldValue::Boolean(b) => b.to_string(),
            FieldValue::Uuid(id) => id.to_string(),
            FieldValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            FieldValue::DateTime(dt) => dt.to_rfc3339(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Integer(n)
    }
}

impl From<Uuid> for FieldValue {
    fn from(id: Uuid) -> Self {
        FieldValue::Uuid(id)
    }
}

impl From<Option<Uuid>> for FieldValue {
    fn from(id: Option<Uuid>) -> Self {
        id.map(FieldValue::Uuid).unwrap_or(FieldValue::Null)
    }
}

impl From<Option<i64>> for FieldValue {
    fn from(n: Option<i64>) -> Self {
        n.map(FieldValue::Integer).unwrap_or(FieldValue::Null)
    }
}

impl From<Option<String>> for FieldValue {
    fn from(s: Option<String>) -> Self {
        s.map(FieldValue::Text).unwrap_or(FieldValue::Null)
    }
}
