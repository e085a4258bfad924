//! View pipeline - pure filter/sort/aggregate over the order collection
//!
//! `(orders, criteria) -> View`. No caching, no incremental update: every
//! render recomputes from scratch.

use crate::model::{Order, OrderStatus};
use serde::{Deserialize, Serialize};

/// Status filter: everything, or one exact status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    fn matches(&self, status: OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(StatusFilter::All);
        }
        s.parse::<OrderStatus>().map(StatusFilter::Only)
    }
}

/// Sort key for the visible set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Newest first (default sort)
    #[default]
    DateDesc,
    DateAsc,
    ValueDesc,
    ValueAsc,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::DateDesc => "date_desc",
            SortKey::DateAsc => "date_asc",
            SortKey::ValueDesc => "value_desc",
            SortKey::ValueAsc => "value_asc",
        }
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date_desc" => Ok(SortKey::DateDesc),
            "date_asc" => Ok(SortKey::DateAsc),
            "value_desc" => Ok(SortKey::ValueDesc),
            "value_asc" => Ok(SortKey::ValueAsc),
            other => Err(format!("unknown sort key: {other}")),
        }
    }
}

/// User-selected query/filter/sort parameters
#[derive(Debug, Clone, Default)]
pub struct Criteria {
    /// Case-insensitive substring matched against id, supplier, or any
    /// item name (OR across the three). Empty matches everything.
    pub query: String,
    pub status: StatusFilter,
    /// Case-insensitive substring on the supplier name. Empty matches
    /// everything.
    pub supplier: String,
    pub sort: SortKey,
}

/// Aggregates over the FULL collection, not the filtered view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewStats {
    pub count: usize,
    pub total_value: f64,
}

/// Pipeline output: the ordered visible subset plus collection stats
#[derive(Debug, Clone)]
pub struct View {
    pub visible: Vec<Order>,
    pub stats: ViewStats,
}

fn passes(order: &Order, criteria: &Criteria, query: &str, supplier: &str) -> bool {
    if !criteria.status.matches(order.status) {
        return false;
    }

    if !supplier.is_empty() && !order.supplier.to_lowercase().contains(supplier) {
        return false;
    }

    if query.is_empty() {
        return true;
    }

    order.id.to_lowercase().contains(query)
        || order.supplier.to_lowercase().contains(query)
        || order
            .items
            .iter()
            .any(|item| item.name.to_lowercase().contains(query))
}

/// Run the pipeline: filter, stable-sort, aggregate.
///
/// Stats are deliberately computed over the whole input, so the header
/// numbers do not change as filters narrow the table.
pub fn build_view(orders: &[Order], criteria: &Criteria) -> View {
    let stats = ViewStats {
        count: orders.len(),
        total_value: orders.iter().map(Order::total).sum(),
    };

    let query = criteria.query.trim().to_lowercase();
    let supplier = criteria.supplier.trim().to_lowercase();

    let mut visible: Vec<Order> = orders
        .iter()
        .filter(|order| passes(order, criteria, &query, &supplier))
        .cloned()
        .collect();

    // Vec::sort_by is stable: equal keys keep their filtered order.
    match criteria.sort {
        SortKey::DateDesc => visible.sort_by(|a, b| b.date.cmp(&a.date)),
        SortKey::DateAsc => visible.sort_by(|a, b| a.date.cmp(&b.date)),
        SortKey::ValueDesc => visible.sort_by(|a, b| b.total().total_cmp(&a.total())),
        SortKey::ValueAsc => visible.sort_by(|a, b| a.total().total_cmp(&b.total())),
    }

    View { visible, stats }
}
