//! The handle returned to callers.

use std::sync::Arc;

use bizobj_core::{InterfaceName, ViewType};
use serde_json::Value;

use crate::error::{BusinessObjectError, InvocationError};
use crate::traits::BusinessProxy;

/// How a [`BusinessObject`] was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleLineage {
    /// Built by a registry-published stateful proxy factory.
    ProxyFactory,
    /// Built directly over the component's live management context.
    NoInterfaceProxy,
    /// Looked up from the name service.
    NameService,
}

/// Handle satisfying a requested business interface.
///
/// A fresh value per resolution; its validity follows the lifecycle of the
/// component instance behind it.
#[derive(Debug, Clone)]
pub struct BusinessObject {
    interface: InterfaceName,
    view: ViewType,
    lineage: HandleLineage,
    proxy: Arc<dyn BusinessProxy>,
}

impl BusinessObject {
    /// Narrows `proxy` to `interface`.
    ///
    /// # Errors
    ///
    /// Returns [`BusinessObjectError::ClassCast`] if the proxy does not
    /// implement `interface`.
    pub fn cast(
        proxy: Arc<dyn BusinessProxy>,
        interface: &InterfaceName,
        view: ViewType,
        lineage: HandleLineage,
    ) -> Result<Self, BusinessObjectError> {
        if !proxy.implements(interface) {
            return Err(BusinessObjectError::ClassCast {
                interface: interface.clone(),
            });
        }
        Ok(Self {
            interface: interface.clone(),
            view,
            lineage,
            proxy,
        })
    }

    /// Interface this handle was requested as.
    #[must_use]
    pub fn interface(&self) -> &InterfaceName {
        &self.interface
    }

    /// View the requested interface classified as.
    #[must_use]
    pub fn view(&self) -> ViewType {
        self.view
    }

    #[must_use]
    pub fn lineage(&self) -> HandleLineage {
        self.lineage
    }

    #[must_use]
    pub fn proxy(&self) -> &Arc<dyn BusinessProxy> {
        &self.proxy
    }

    /// Calls `method` through the underlying proxy.
    ///
    /// # Errors
    ///
    /// Returns [`InvocationError`] if the call fails.
    pub fn invoke(&self, method: &str, args: &[Value]) -> Result<Value, InvocationError> {
        self.proxy.invoke(method, args)
    }
}
