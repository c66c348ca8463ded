//! Local key-value persistence abstraction.
//!
//! The history and journal operations are written against this trait so they
//! run against an in-memory fake in tests and a disk-backed store in the app.

use std::collections::HashMap;

/// Minimal string key-value store, mirroring the web-storage surface the
/// original data lives in: get / set / remove, one string value per slot.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-memory store: the test double, and the session cache for screens that
/// do not need durability.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.slots.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.slots.remove(key);
    }
}
