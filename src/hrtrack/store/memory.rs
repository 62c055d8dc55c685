use super::{Collection, StateStore};
use crate::error::Result;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data across processes.
#[derive(Default)]
pub struct InMemoryStore {
    entries: HashMap<Collection, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw payload, bypassing the domain state. Used in tests to
    /// simulate pre-existing (or corrupt) persisted data.
    pub fn seed(mut self, collection: Collection, payload: &str) -> Self {
        self.entries.insert(collection, payload.to_string());
        self
    }
}

impl StateStore for InMemoryStore {
    fn load(&self, collection: Collection) -> Result<Option<String>> {
        Ok(self.entries.get(&collection).cloned())
    }

    fn save(&mut self, collection: Collection, payload: &str) -> Result<()> {
        self.entries.insert(collection, payload.to_string());
        Ok(())
    }
}
