// Waybill - Order Fulfillment Export and Delivery Engine
// Copyright (c) 2025 Waybill Contributors
// Licensed under the MIT License

//! Order aggregate and lifecycle status
//!
//! An [`Order`] is the fulfillment aggregate produced when an upstream
//! requisition is converted. It owns its line items exclusively: order and
//! line items are always loaded and saved together, never partially.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Lifecycle status of an [`Order`]
///
/// `ReadyToPack`, `InRoute` and `TransferFailed` are owned by the delivery
/// state machine; the remaining states are reached by other parts of the
/// fulfillment workflow and are never mutated here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Ordered,
    Fulfilling,
    Shipped,
    Received,
    TransferFailed,
    InRoute,
    ReadyToPack,
    Creating,
}

impl OrderStatus {
    fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Ordered => "ORDERED",
            OrderStatus::Fulfilling => "FULFILLING",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Received => "RECEIVED",
            OrderStatus::TransferFailed => "TRANSFER_FAILED",
            OrderStatus::InRoute => "IN_ROUTE",
            OrderStatus::ReadyToPack => "READY_TO_PACK",
            OrderStatus::Creating => "CREATING",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    /// Parses a status name, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const ALL: [OrderStatus; 8] = [
            OrderStatus::Ordered,
            OrderStatus::Fulfilling,
            OrderStatus::Shipped,
            OrderStatus::Received,
            OrderStatus::TransferFailed,
            OrderStatus::InRoute,
            OrderStatus::ReadyToPack,
            OrderStatus::Creating,
        ];

        ALL.iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("unknown order status: {s}"))
    }
}

/// One product line within an order
///
/// Owned exclusively by its [`Order`] and deleted with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItem {
    /// Unique identifier for this line item
    pub id: Uuid,

    /// Identifier of the orderable (product) this line refers to
    pub orderable_id: Uuid,

    /// Quantity requested by the ordering facility
    pub ordered_quantity: i64,

    /// Quantity actually filled
    pub filled_quantity: i64,

    /// Quantity approved for shipment
    pub approved_quantity: i64,

    /// Number of packs to ship, when already computed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packs_to_ship: Option<i64>,
}

/// The fulfillment aggregate produced from an approved requisition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique identifier
    pub id: Uuid,

    /// Identifier of the requisition this order was converted from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<Uuid>,

    /// Whether this is an emergency order
    pub emergency: bool,

    /// Ordering facility
    pub facility_id: Uuid,

    /// Program the order belongs to
    pub program_id: Uuid,

    /// Processing period the order was raised in
    pub processing_period_id: Uuid,

    /// Facility that requested the order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requesting_facility_id: Option<Uuid>,

    /// Facility that will receive the order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiving_facility_id: Option<Uuid>,

    /// Facility responsible for fulfilling the order; delivery routing is
    /// keyed by this id, and an order without one cannot be transferred
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplying_facility_id: Option<Uuid>,

    /// Human-facing order number; unique and immutable once assigned
    pub order_code: String,

    /// Monetary estimate for the order
    pub quoted_cost: f64,

    /// Current lifecycle status
    pub status: OrderStatus,

    /// When the order was created
    pub created_date: DateTime<Utc>,

    /// Who created the order
    pub created_by_id: Uuid,

    /// Line items, in their stored order
    #[serde(default)]
    pub line_items: Vec<OrderLineItem>,
}

impl Order {
    /// Returns true when the order is eligible for a manual transfer retry
    pub fn is_retryable(&self) -> bool {
        self.status == OrderStatus::TransferFailed
    }
}
