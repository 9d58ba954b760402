//! In-memory slot storage for tests and throwaway sessions.

use super::{SlotStorage, StorageResult};
use std::collections::HashMap;

/// `HashMap`-backed slot storage.
///
/// Tracks the number of successful writes so callers can assert that each
/// store mutation persists exactly once.
#[derive(Debug, Clone, Default)]
pub struct MemorySlotStorage {
    slots: HashMap<String, String>,
    writes: usize,
}

impl MemorySlotStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates `name` without counting it as a write.
    pub fn with_slot(name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut storage = Self::new();
        storage.slots.insert(name.into(), value.into());
        storage
    }

    /// Number of `write_slot` calls served so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl SlotStorage for MemorySlotStorage {
    fn read_slot(&self, name: &str) -> StorageResult<Option<String>> {
        Ok(self.slots.get(name).cloned())
    }

    fn write_slot(&mut self, name: &str, value: &str) -> StorageResult<()> {
        self.slots.insert(name.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
