//! Storage abstraction: a named key-value slot
//!
//! The store persists the whole order collection as one serialized value
//! under one key. Backends implement [`KeySlot`]; the production backend is
//! redb ([`RedbSlot`]), tests use the in-memory map ([`MemorySlot`]).

mod memory;
mod redb_slot;

pub use memory::MemorySlot;
pub use redb_slot::RedbSlot;

use thiserror::Error;

/// Slot backend errors
#[derive(Debug, Error)]
pub enum SlotError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),
}

pub type SlotResult<T> = Result<T, SlotError>;

/// A named slot holding at most one string value per key
///
/// Whole-value replace semantics: `set` overwrites any previous content,
/// there is no merge. The store layer absorbs all backend errors into
/// "no data" defaults, so implementations just report what happened.
pub trait KeySlot {
    /// Read the value under `key`, `None` if absent
    fn get(&self, key: &str) -> SlotResult<Option<String>>;

    /// Replace the value under `key`
    fn set(&self, key: &str, value: &str) -> SlotResult<()>;
}
