use std::sync::Arc;

use dashmap::DashMap;

use crate::error::LookupError;
use crate::traits::{BusinessProxy, NameService};

/// Concurrent in-memory name service.
#[derive(Default)]
pub struct InMemoryNameService {
    bindings: DashMap<String, Arc<dyn BusinessProxy>>,
}

impl InMemoryNameService {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes `object` under `key`.
    ///
    /// # Errors
    ///
    /// Returns the key back if something is already bound there.
    pub fn bind(&self, key: impl Into<String>, object: Arc<dyn BusinessProxy>) -> Result<(), String> {
        let key = key.into();
        match self.bindings.entry(key) {
            dashmap::mapref::entry::Entry::Occupied(entry) => Err(entry.key().clone()),
            dashmap::mapref::entry::Entry::Vacant(entry) => {
                tracing::debug!(key = %entry.key(), "name bound");
                entry.insert(object);
                Ok(())
            }
        }
    }

    /// Publishes `object` under `key`, replacing any existing binding.
    pub fn rebind(&self, key: impl Into<String>, object: Arc<dyn BusinessProxy>) {
        self.bindings.insert(key.into(), object);
    }

    /// Removes the binding under `key`, returning whether one existed.
    pub fn unbind(&self, key: &str) -> bool {
        self.bindings.remove(key).is_some()
    }

    /// Currently bound keys, sorted.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.bindings.iter().map(|e| e.key().clone()).collect();
        keys.sort();
        keys
    }
}

impl NameService for InMemoryNameService {
    fn lookup(&self, key: &str) -> Result<Arc<dyn BusinessProxy>, LookupError> {
        self.bindings
            .get(key)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| LookupError::not_found(key))
    }
}
