//! redb-backed slot
//!
//! One table (`slots`), key and value both UTF-8 strings. redb commits with
//! `Durability::Immediate` by default: once `commit()` returns the write is
//! persistent, and the file is always in a consistent state.

use super::{KeySlot, SlotResult};
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use std::path::Path;
use std::sync::Arc;

/// Table for slot values: key = slot name, value = serialized content
const SLOTS_TABLE: TableDefinition<&str, &str> = TableDefinition::new("slots");

/// Durable slot backend on a single redb file
#[derive(Debug, Clone)]
pub struct RedbSlot {
    db: Arc<Database>,
}

impl RedbSlot {
    /// Open (or create) the database at `path`
    pub fn open(path: impl AsRef<Path>) -> SlotResult<Self> {
        let db = Database::create(path)?;
        Self::with_database(db)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> SlotResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::with_database(db)
    }

    fn with_database(db: Database) -> SlotResult<Self> {
        // Create the table up front so read transactions never see a
        // missing-table error on a fresh database.
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(SLOTS_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }
}

impl KeySlot for RedbSlot {
    fn get(&self, key: &str) -> SlotResult<Option<String>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SLOTS_TABLE)?;
        Ok(table.get(key)?.map(|guard| guard.value().to_string()))
    }

    fn set(&self, key: &str, value: &str) -> SlotResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(SLOTS_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}
