//! Edit-form input boundary
//!
//! Line items cross the boundary in a one-per-line `name|qty|price`
//! mini-format, parsed permissively: short lines are dropped and malformed
//! numbers coerce to 0. Validation is the only place a user-facing error
//! is produced; on rejection nothing is persisted.

use crate::model::{LineItem, OrderStatus};
use thiserror::Error;

/// Form rejection. The single user-facing failure of the whole system.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("supplier and at least one item are required")]
    MissingFields,
}

/// Validated-or-not order input from the edit form
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub supplier: String,
    /// ISO date (`YYYY-MM-DD`)
    pub date: String,
    pub status: OrderStatus,
    pub items: Vec<LineItem>,
}

impl OrderDraft {
    /// Build a draft from raw form fields, parsing the items mini-format.
    /// The supplier is trimmed; call [`validate`](Self::validate) before
    /// persisting.
    pub fn from_form(supplier: &str, date: &str, status: OrderStatus, items_text: &str) -> Self {
        Self {
            supplier: supplier.trim().to_string(),
            date: date.to_string(),
            status,
            items: parse_items(items_text),
        }
    }

    /// Input-boundary rule: non-blank supplier and at least one item.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.supplier.trim().is_empty() || self.items.is_empty() {
            return Err(FormError::MissingFields);
        }
        Ok(())
    }
}

/// Loosely parse a non-negative number; anything else is 0.
fn parse_loose(s: &str) -> f64 {
    s.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(0.0)
}

/// Parse the `name|qty|price` mini-format, one item per line.
///
/// Lines are trimmed, blank lines skipped, and lines with fewer than three
/// fields dropped. A decimal comma in the price is normalized to a dot
/// before parsing.
pub fn parse_items(text: &str) -> Vec<LineItem> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let parts: Vec<&str> = line.split('|').map(str::trim).collect();
            if parts.len() < 3 {
                return None;
            }

            Some(LineItem {
                name: parts[0].to_string(),
                qty: parse_loose(parts[1]),
                price: parse_loose(&parts[2].replace(',', ".")),
            })
        })
        .collect()
}
