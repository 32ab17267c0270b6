use std::sync::Arc;

use bizobj_core::SessionBeanMetadata;

use crate::error::LookupError;
use crate::stores::InMemoryRegistrar;
use crate::traits::{SessionRegistrar, StatefulProxyFactory};

const PROXY_FACTORY_PREFIX: &str = "ProxyFactory";

/// Session registrar publishing proxy factories under
/// `ProxyFactory/<ejb_name>/<jndi_name>`.
///
/// Local and remote views share the scheme; their JNDI names keep the keys
/// apart.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSessionRegistrar;

impl DefaultSessionRegistrar {
    /// Key under which the factory for `jndi_name` is registered.
    #[must_use]
    pub fn key_for(jndi_name: &str, metadata: &SessionBeanMetadata) -> String {
        format!("{PROXY_FACTORY_PREFIX}/{}/{jndi_name}", metadata.ejb_name)
    }

    /// Registers `factory` in `registrar` for the view bound at `jndi_name`
    /// and returns the key used.
    pub fn register_proxy_factory(
        registrar: &InMemoryRegistrar,
        jndi_name: &str,
        metadata: &SessionBeanMetadata,
        factory: Arc<dyn StatefulProxyFactory>,
    ) -> String {
        let key = Self::key_for(jndi_name, metadata);
        registrar.bind(key.clone(), factory);
        key
    }
}

impl SessionRegistrar for DefaultSessionRegistrar {
    fn proxy_factory_registry_key(
        &self,
        jndi_name: &str,
        metadata: &SessionBeanMetadata,
        _is_local: bool,
    ) -> Result<String, LookupError> {
        if jndi_name.is_empty() {
            return Err(LookupError::not_found(format!(
                "{PROXY_FACTORY_PREFIX}/{}/",
                metadata.ejb_name
            )));
        }
        Ok(Self::key_for(jndi_name, metadata))
    }
}
