//! In-memory store used by unit tests and host-embedded callers that manage
//! persistence themselves.

use crate::errors::AppResult;
use crate::store::{CardStore, Scope};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<(String, Scope, String), Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CardStore for MemoryStore {
    fn get(&self, card_id: &str, scope: Scope, key: &str) -> AppResult<Option<Value>> {
        Ok(self
            .entries
            .get(&(card_id.to_string(), scope, key.to_string()))
            .cloned())
    }

    fn set(&mut self, card_id: &str, scope: Scope, key: &str, value: Value) -> AppResult<()> {
        self.entries
            .insert((card_id.to_string(), scope, key.to_string()), value);
        Ok(())
    }

    fn remove(&mut self, card_id: &str, scope: Scope, key: &str) -> AppResult<()> {
        self.entries
            .remove(&(card_id.to_string(), scope, key.to_string()));
        Ok(())
    }
}
