//! In-memory slot backend (tests and embedders without a disk)

use super::{KeySlot, SlotResult};
use parking_lot::Mutex;
use std::collections::HashMap;

/// Mutex-guarded map, one entry per slot key
#[derive(Debug, Default)]
pub struct MemorySlot {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeySlot for MemorySlot {
    fn get(&self, key: &str) -> SlotResult<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> SlotResult<()> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
