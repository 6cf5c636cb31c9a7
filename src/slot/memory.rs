use parking_lot::Mutex;
use std::collections::HashMap;

use super::traits::DurableSlot;

/// In-process slot; stands in for browser local storage in tests and
/// throwaway sessions.
#[derive(Default)]
pub struct MemorySlot {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DurableSlot for MemorySlot {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.entries
            .lock()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> anyhow::Result<()> {
        self.entries.lock().remove(key);
        Ok(())
    }
}
