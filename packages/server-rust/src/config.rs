//! Configuration for the business object factories.

use std::sync::Arc;

use bizobj_core::{BindingPolicy, BindingPolicyConfig, Component, NamingError, SessionBeanMetadata};
use serde::{Deserialize, Serialize};

/// Bind name the stateful session registrar is published under by default.
pub const DEFAULT_REGISTRAR_BIND_NAME: &str = "JndiStatefulSessionRegistrar";

/// How the stateless factory names the no-interface view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoInterfaceNaming {
    /// Resolve the implementation type like any other interface; undeclared
    /// names fall back to the bean's remote binding.
    #[default]
    PerInterface,
    /// Resolve the implementation type through the policy's dedicated
    /// no-interface binding.
    Dedicated,
}

/// Factory-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactoryConfig {
    /// Naming strategy for stateless no-interface lookups.
    pub no_interface_naming: NoInterfaceNaming,
    /// Registrar bind name used when a component does not override it.
    pub registrar_bind_name: String,
    /// Binding policy for components assembled from this configuration.
    pub binding_policy: BindingPolicyConfig,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            no_interface_naming: NoInterfaceNaming::default(),
            registrar_bind_name: DEFAULT_REGISTRAR_BIND_NAME.to_string(),
            binding_policy: BindingPolicyConfig::default(),
        }
    }
}

impl FactoryConfig {
    /// Parses a JSON document; absent fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON for this shape or
    /// the configured binding policy fails validation.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.build_binding_policy()?;
        Ok(config)
    }

    /// Builds the configured binding policy.
    ///
    /// # Errors
    ///
    /// Returns [`NamingError::InvalidTemplate`] for an invalid template policy.
    pub fn build_binding_policy(&self) -> Result<Arc<dyn BindingPolicy>, NamingError> {
        self.binding_policy.build()
    }

    /// Assembles a deployed component named `name` that resolves its keys
    /// through the configured binding policy.
    ///
    /// # Errors
    ///
    /// Returns [`NamingError::InvalidTemplate`] for an invalid template policy.
    pub fn component(
        &self,
        name: impl Into<String>,
        metadata: SessionBeanMetadata,
    ) -> Result<Component, NamingError> {
        Ok(Component::new(name, metadata, self.build_binding_policy()?))
    }
}
