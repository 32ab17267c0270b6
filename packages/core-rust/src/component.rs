use std::sync::Arc;

use crate::metadata::SessionBeanMetadata;
use crate::naming::BindingPolicy;

/// A deployed session component as visible to business object resolution.
///
/// Owned by the surrounding container; resolution only reads it.
#[derive(Debug, Clone)]
pub struct Component {
    /// Unique container name; also the key of the component's live
    /// management context.
    name: String,
    metadata: Arc<SessionBeanMetadata>,
    binding_policy: Arc<dyn BindingPolicy>,
    /// Where the stateful session registrar is published, when it differs
    /// from the factory-wide default.
    registrar_bind_name: Option<String>,
}

impl Component {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        metadata: impl Into<Arc<SessionBeanMetadata>>,
        binding_policy: Arc<dyn BindingPolicy>,
    ) -> Self {
        Self {
            name: name.into(),
            metadata: metadata.into(),
            binding_policy,
            registrar_bind_name: None,
        }
    }

    #[must_use]
    pub fn with_registrar_bind_name(mut self, name: impl Into<String>) -> Self {
        self.registrar_bind_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn metadata(&self) -> &SessionBeanMetadata {
        &self.metadata
    }

    #[must_use]
    pub fn binding_policy(&self) -> &dyn BindingPolicy {
        self.binding_policy.as_ref()
    }

    #[must_use]
    pub fn registrar_bind_name(&self) -> Option<&str> {
        self.registrar_bind_name.as_deref()
    }
}
