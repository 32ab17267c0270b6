use std::sync::Arc;

use dashmap::DashMap;

use crate::error::LookupError;
use crate::traits::{Registrar, RegistryEntry};

/// Concurrent object store keyed by bind name.
///
/// Each entry stores the registered `Arc<T>` behind `dyn Any`, so trait
/// objects (`Arc<dyn SessionRegistrar>`) can be registered and retrieved
/// through [`<dyn Registrar>::lookup`](crate::traits::Registrar).
#[derive(Default)]
pub struct InMemoryRegistrar {
    entries: DashMap<String, RegistryEntry>,
}

impl InMemoryRegistrar {
    /// Creates an empty registrar.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Binds `value` under `key`, replacing any previous entry.
    pub fn bind<T>(&self, key: impl Into<String>, value: Arc<T>)
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let key = key.into();
        tracing::debug!(key = %key, kind = std::any::type_name::<T>(), "registrar bind");
        let entry: RegistryEntry = Arc::new(value);
        self.entries.insert(key, entry);
    }

    /// Removes the entry under `key`, returning whether one existed.
    pub fn unbind(&self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Registrar for InMemoryRegistrar {
    fn lookup_entry(&self, key: &str) -> Result<RegistryEntry, LookupError> {
        self.entries
            .get(key)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| LookupError::not_found(key))
    }
}
