//! Order store - durable home for the order collection
//!
//! Every mutation is a whole-collection read-modify-write against one slot
//! key. There is exactly one logical actor; the backend's own transaction is
//! the only locking involved.
//!
//! # Failure semantics
//!
//! Backend failures and corrupt persisted data both degrade to "no data":
//! `load` returns an empty collection and `save` drops the write, each with
//! a log line. Nothing here raises toward the caller.

use crate::form::OrderDraft;
use crate::model::{LineItem, Order, OrderStatus};
use crate::storage::KeySlot;
use rand::Rng;

/// Slot key the collection persists under
pub const SLOT_KEY: &str = "ordens_compra_v1";

/// Generate an order ID: `OC-` plus 7 random base36 chars.
/// Collisions are possible in principle and not detected.
pub fn new_id() -> String {
    const CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::thread_rng();
    let suffix: String = (0..7)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect();
    format!("OC-{suffix}")
}

/// Store over an injected slot backend
pub struct OrderStore<S: KeySlot> {
    slot: S,
}

impl<S: KeySlot> OrderStore<S> {
    pub fn new(slot: S) -> Self {
        Self { slot }
    }

    /// Read the whole collection. Absent slot, backend error, and corrupt
    /// JSON all yield an empty collection.
    pub fn load(&self) -> Vec<Order> {
        let raw = match self.slot.get(SLOT_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!("slot read failed, treating as empty: {err}");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(orders) => orders,
            Err(err) => {
                tracing::warn!("stored orders failed to parse, treating as empty: {err}");
                Vec::new()
            }
        }
    }

    /// Persist the whole collection, replacing any previous content.
    pub fn save(&self, orders: &[Order]) {
        let raw = match serde_json::to_string(orders) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::error!("order serialization failed, write dropped: {err}");
                return;
            }
        };

        if let Err(err) = self.slot.set(SLOT_KEY, &raw) {
            tracing::error!("slot write failed, write dropped: {err}");
        }
    }

    /// Seed the two illustrative orders when the collection is empty.
    /// Idempotent, called on every startup.
    pub fn seed_if_empty(&self) {
        if !self.load().is_empty() {
            return;
        }

        let today = chrono::Utc::now().format("%Y-%m-%d").to_string();
        let sample = vec![
            Order {
                id: new_id(),
                supplier: "Tecfornecedores Ltda".to_string(),
                date: today.clone(),
                status: OrderStatus::Pending,
                items: vec![
                    LineItem::new("Parafuso", 100.0, 0.45),
                    LineItem::new("Porca", 50.0, 0.5),
                ],
            },
            Order {
                id: new_id(),
                supplier: "EletroMax".to_string(),
                date: today,
                status: OrderStatus::InProgress,
                items: vec![LineItem::new("Cabo HDMI", 10.0, 15.0)],
            },
        ];

        tracing::info!("seeding {} illustrative orders", sample.len());
        self.save(&sample);
    }

    /// Look up one order by ID
    pub fn get(&self, id: &str) -> Option<Order> {
        self.load().into_iter().find(|o| o.id == id)
    }

    /// Append a new order built from `draft`, returning it with its fresh ID
    pub fn create(&self, draft: OrderDraft) -> Order {
        let order = Order {
            id: new_id(),
            supplier: draft.supplier,
            date: draft.date,
            status: draft.status,
            items: draft.items,
        };

        let mut orders = self.load();
        orders.push(order.clone());
        self.save(&orders);
        order
    }

    /// Replace the supplier/date/status/items of the order with `id`,
    /// keeping the ID. Nonexistent ID is a silent no-op (returns false).
    pub fn update(&self, id: &str, draft: OrderDraft) -> bool {
        let mut orders = self.load();
        let Some(order) = orders.iter_mut().find(|o| o.id == id) else {
            return false;
        };

        order.supplier = draft.supplier;
        order.date = draft.date;
        order.status = draft.status;
        order.items = draft.items;

        self.save(&orders);
        true
    }

    /// Remove the order with `id`. Nonexistent ID is a silent no-op.
    pub fn delete(&self, id: &str) -> bool {
        let mut orders = self.load();
        let before = orders.len();
        orders.retain(|o| o.id != id);

        if orders.len() == before {
            return false;
        }
        self.save(&orders);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KeySlot, MemorySlot, SlotError, SlotResult};

    fn create_test_store() -> OrderStore<MemorySlot> {
        OrderStore::new(MemorySlot::new())
    }

    /// Slot whose backend is permanently unavailable
    struct FailingSlot;

    impl FailingSlot {
        fn error() -> SlotError {
            SlotError::Storage(std::io::Error::other("backend unavailable").into())
        }
    }

    impl KeySlot for FailingSlot {
        fn get(&self, _key: &str) -> SlotResult<Option<String>> {
            Err(Self::error())
        }

        fn set(&self, _key: &str, _value: &str) -> SlotResult<()> {
            Err(Self::error())
        }
    }

    fn draft(supplier: &str, date: &str, items: Vec<LineItem>) -> OrderDraft {
        OrderDraft {
            supplier: supplier.to_string(),
            date: date.to_string(),
            status: OrderStatus::Pending,
            items,
        }
    }

    #[test]
    fn test_load_empty_slot() {
        let store = create_test_store();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_slot_read_failure_degrades_to_empty() {
        let store = OrderStore::new(FailingSlot);
        assert!(store.load().is_empty());
        assert!(store.get("OC-abc1234").is_none());
    }

    #[test]
    fn test_slot_write_failure_is_absorbed() {
        let store = OrderStore::new(FailingSlot);

        // The write is dropped, never raised.
        store.save(&[]);

        // Mutations on a failing backend still return without raising.
        let order = store.create(draft(
            "EletroMax",
            "2024-03-01",
            vec![LineItem::new("Cabo HDMI", 10.0, 15.0)],
        ));
        assert!(order.id.starts_with("OC-"));
        store.seed_if_empty();
        assert!(!store.delete(&order.id));
    }

    #[test]
    fn test_corrupt_slot_treated_as_empty() {
        let slot = MemorySlot::new();
        slot.set(SLOT_KEY, "{not json").unwrap();

        let store = OrderStore::new(slot);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let store = create_test_store();
        let order = store.create(draft(
            "EletroMax",
            "2024-03-01",
            vec![LineItem::new("Cabo HDMI", 10.0, 15.0)],
        ));

        let loaded = store.load();
        assert_eq!(loaded, vec![order]);
    }

    #[test]
    fn test_save_of_loaded_collection_is_idempotent() {
        let store = create_test_store();
        store.seed_if_empty();

        let first = store.slot.get(SLOT_KEY).unwrap().unwrap();
        store.save(&store.load());
        let second = store.slot.get(SLOT_KEY).unwrap().unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_seed_if_empty_is_idempotent() {
        let store = create_test_store();
        store.seed_if_empty();
        let seeded = store.load();
        assert_eq!(seeded.len(), 2);

        store.seed_if_empty();
        assert_eq!(store.load(), seeded);
    }

    #[test]
    fn test_seed_skipped_when_data_exists() {
        let store = create_test_store();
        store.create(draft("Solo", "2024-01-01", vec![LineItem::new("x", 1.0, 1.0)]));

        store.seed_if_empty();
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn test_update_replaces_fields_keeps_id() {
        let store = create_test_store();
        let order = store.create(draft(
            "EletroMax",
            "2024-03-01",
            vec![LineItem::new("Cabo HDMI", 10.0, 15.0)],
        ));

        let changed = store.update(
            &order.id,
            OrderDraft {
                supplier: "EletroMax Matriz".to_string(),
                date: "2024-03-02".to_string(),
                status: OrderStatus::Received,
                items: vec![LineItem::new("Cabo HDMI 2m", 5.0, 18.0)],
            },
        );
        assert!(changed);

        let loaded = store.get(&order.id).unwrap();
        assert_eq!(loaded.id, order.id);
        assert_eq!(loaded.supplier, "EletroMax Matriz");
        assert_eq!(loaded.status, OrderStatus::Received);
        assert_eq!(loaded.items.len(), 1);
    }

    #[test]
    fn test_update_nonexistent_id_is_noop() {
        let store = create_test_store();
        store.seed_if_empty();
        let before = store.load();

        let changed = store.update("OC-missing", draft("X", "2024-01-01", vec![]));
        assert!(!changed);
        assert_eq!(store.load(), before);
    }

    #[test]
    fn test_delete_removes_only_target() {
        let store = create_test_store();
        let a = store.create(draft("A", "2024-01-01", vec![LineItem::new("x", 1.0, 1.0)]));
        let b = store.create(draft("B", "2024-01-02", vec![LineItem::new("y", 1.0, 1.0)]));

        assert!(store.delete(&a.id));
        let left = store.load();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].id, b.id);
    }

    #[test]
    fn test_delete_nonexistent_id_is_noop() {
        let store = create_test_store();
        store.seed_if_empty();
        let before = store.load();

        assert!(!store.delete("OC-missing"));
        assert_eq!(store.load(), before);
    }

    #[test]
    fn test_new_id_shape() {
        for _ in 0..50 {
            let id = new_id();
            assert!(id.starts_with("OC-"));
            assert_eq!(id.len(), 10);
            assert!(
                id[3..]
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
            );
        }
    }
}
