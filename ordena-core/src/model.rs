//! Order data model
//!
//! The wire layout is a JSON array of orders, each with its line items under
//! the short keys `qty`/`price`. Monetary totals are derived, never stored.

use serde::{Deserialize, Serialize};

/// Purchase-order status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    InProgress,
    Received,
    Cancelled,
}

impl OrderStatus {
    /// All statuses, in display order
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::InProgress,
        OrderStatus::Received,
        OrderStatus::Cancelled,
    ];

    /// Wire/CLI form (`pending`, `in_progress`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::InProgress => "in_progress",
            OrderStatus::Received => "received",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Human-readable label for rendering
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::InProgress => "In progress",
            OrderStatus::Received => "Received",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "in_progress" => Ok(OrderStatus::InProgress),
            "received" => Ok(OrderStatus::Received),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(format!("unknown status: {other}")),
        }
    }
}

/// Order line item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    pub name: String,
    /// Quantity (non-negative; malformed form input is coerced to 0)
    pub qty: f64,
    /// Unit price in currency units (non-negative; same coercion rule)
    pub price: f64,
}

impl LineItem {
    pub fn new(name: impl Into<String>, qty: f64, price: f64) -> Self {
        Self {
            name: name.into(),
            qty,
            price,
        }
    }

    /// Line value: `qty * price`
    pub fn subtotal(&self) -> f64 {
        self.qty * self.price
    }
}

/// Purchase order
///
/// `date` is an ISO `YYYY-MM-DD` string and is compared lexicographically,
/// which is order-preserving for that format. A persisted collection may
/// contain legacy orders with zero items; only the form boundary enforces
/// at least one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Opaque unique identifier, immutable once created
    pub id: String,
    pub supplier: String,
    /// ISO date (`YYYY-MM-DD`)
    pub date: String,
    pub status: OrderStatus,
    pub items: Vec<LineItem>,
}

impl Order {
    /// Derived order value: sum of line subtotals. Never stored.
    pub fn total(&self) -> f64 {
        self.items.iter().map(LineItem::subtotal).sum()
    }
}
