//! Core library for the ordena purchase-order ledger
//!
//! Owns the order data model, the persistence boundary (a named key-value
//! slot with pluggable backends), the pure filter/sort/aggregate view
//! pipeline, the edit-form input boundary, and CSV export. Presentation is
//! deliberately out of scope; callers drive these pieces and render the
//! results themselves.

pub mod export;
pub mod form;
pub mod model;
pub mod pipeline;
pub mod storage;
pub mod store;

// Re-exports (the typical embedder surface)
pub use form::{FormError, OrderDraft, parse_items};
pub use model::{LineItem, Order, OrderStatus};
pub use pipeline::{Criteria, SortKey, StatusFilter, View, ViewStats, build_view};
pub use storage::{KeySlot, MemorySlot, RedbSlot, SlotError};
pub use store::OrderStore;
