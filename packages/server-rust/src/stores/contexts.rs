use std::sync::Arc;

use dashmap::DashMap;

use crate::traits::{ManagementContext, ManagementContextProvider};

/// Management contexts of deployed components, keyed by component name.
#[derive(Default)]
pub struct ContextRegistry {
    contexts: DashMap<String, Arc<dyn ManagementContext>>,
}

impl ContextRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `context` under its own name, replacing any previous one.
    pub fn register(&self, context: Arc<dyn ManagementContext>) {
        self.contexts.insert(context.name().to_string(), context);
    }

    /// Removes the context of `component_name`, returning whether one existed.
    pub fn unregister(&self, component_name: &str) -> bool {
        self.contexts.remove(component_name).is_some()
    }
}

impl ManagementContextProvider for ContextRegistry {
    fn context(&self, component_name: &str) -> Option<Arc<dyn ManagementContext>> {
        self.contexts
            .get(component_name)
            .map(|entry| entry.value().clone())
    }
}
