//! Application handlers
//!
//! One handler per user action, each a pure call into the core over the
//! injected store. All UI state (which order an edit targets, the current
//! criteria) arrives as explicit arguments; nothing is kept in globals.

use ordena_core::{
    Criteria, FormError, KeySlot, Order, OrderDraft, OrderStatus, OrderStore, View, build_view,
    export::to_csv, parse_items,
};

/// Partial edit of an order: `None` keeps the current value. Items are the
/// raw `name|qty|price` lines from the form; `None` keeps the current items.
#[derive(Debug, Clone, Default)]
pub struct OrderPatch {
    pub supplier: Option<String>,
    pub date: Option<String>,
    pub status: Option<OrderStatus>,
    pub items_text: Option<String>,
}

pub struct App<S: KeySlot> {
    store: OrderStore<S>,
}

impl<S: KeySlot> App<S> {
    pub fn new(store: OrderStore<S>) -> Self {
        Self { store }
    }

    /// The table view: filter, sort, stats
    pub fn list(&self, criteria: &Criteria) -> View {
        build_view(&self.store.load(), criteria)
    }

    /// Detail lookup; `None` for an unknown id, never an error
    pub fn show(&self, id: &str) -> Option<Order> {
        self.store.get(id)
    }

    /// Validate and persist a new order
    pub fn add(&self, draft: OrderDraft) -> Result<Order, FormError> {
        draft.validate()?;
        Ok(self.store.create(draft))
    }

    /// Overlay `patch` on the stored order, re-validate, persist.
    ///
    /// Returns `Ok(false)` when the id does not exist (silent no-op), and
    /// `Err` when the patched form would be incomplete - in both cases the
    /// collection is untouched.
    pub fn edit(&self, id: &str, patch: OrderPatch) -> Result<bool, FormError> {
        let Some(current) = self.store.get(id) else {
            tracing::debug!("edit of unknown order {id}, ignoring");
            return Ok(false);
        };

        let draft = OrderDraft {
            supplier: patch.supplier.unwrap_or(current.supplier),
            date: patch.date.unwrap_or(current.date),
            status: patch.status.unwrap_or(current.status),
            items: match patch.items_text {
                Some(text) => parse_items(&text),
                None => current.items,
            },
        };
        draft.validate()?;

        Ok(self.store.update(id, draft))
    }

    /// Delete by id; unknown id is a silent no-op
    pub fn remove(&self, id: &str) -> bool {
        self.store.delete(id)
    }

    /// CSV of the whole collection
    pub fn export_csv(&self) -> String {
        to_csv(&self.store.load())
    }

    pub fn seed_if_empty(&self) {
        self.store.seed_if_empty();
    }
}
