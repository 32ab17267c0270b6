//! Collaborator contracts consumed by the business object factories.
//!
//! The factories receive every collaborator through their constructors; no
//! process-wide locator is consulted. In-memory implementations live in
//! [`crate::stores`] and [`crate::proxy`].

use std::any::{type_name, Any};
use std::fmt;
use std::sync::Arc;

use bizobj_core::{Component, InterfaceName, SessionBeanMetadata, SessionId};
use serde_json::Value;

use crate::error::{BusinessObjectError, InvocationError, LookupError, ProxyError};
use crate::handle::BusinessObject;

// ---------------------------------------------------------------------------
// BusinessObjectFactory (inbound)
// ---------------------------------------------------------------------------

/// Creates the handle a caller receives when asking a component for one of
/// its interfaces. Implemented per session kind.
pub trait BusinessObjectFactory: Send + Sync {
    /// Resolves a handle for `interface` on `component`.
    ///
    /// # Errors
    ///
    /// Returns [`BusinessObjectError`] when the request breaks the factory
    /// contract, the interface is not exposed, or a collaborator fails.
    fn create_business_object(
        &self,
        component: &Component,
        session_id: Option<&SessionId>,
        interface: &InterfaceName,
    ) -> Result<BusinessObject, BusinessObjectError>;
}

// ---------------------------------------------------------------------------
// Proxies and interception
// ---------------------------------------------------------------------------

/// Connects a proxy's method calls to a live component instance.
pub trait InvocationHandler: Send + Sync + fmt::Debug {
    /// Forwards one call.
    ///
    /// # Errors
    ///
    /// Returns [`InvocationError`] if the target rejects or fails the call.
    fn invoke(&self, method: &str, args: &[Value]) -> Result<Value, InvocationError>;
}

/// A callable object standing in for one or more interfaces of a component.
pub trait BusinessProxy: Send + Sync + fmt::Debug {
    /// Whether the proxy can be used as `interface`.
    fn implements(&self, interface: &InterfaceName) -> bool;

    /// Calls `method` on the component behind the proxy.
    ///
    /// # Errors
    ///
    /// Returns [`InvocationError`] if the call fails.
    fn invoke(&self, method: &str, args: &[Value]) -> Result<Value, InvocationError>;
}

/// Builds proxies implementing a target type on top of an invocation handler.
pub trait ProxyBuilder: Send + Sync {
    /// # Errors
    ///
    /// Returns [`ProxyError`] if no proxy can be produced for `target`.
    fn build(
        &self,
        target: &InterfaceName,
        handler: Arc<dyn InvocationHandler>,
    ) -> Result<Arc<dyn BusinessProxy>, ProxyError>;
}

// ---------------------------------------------------------------------------
// Management contexts
// ---------------------------------------------------------------------------

/// Live management context of a deployed component, through which calls
/// reach running instances.
pub trait ManagementContext: Send + Sync + fmt::Debug {
    /// Container name of the component this context manages.
    fn name(&self) -> &str;

    /// Invokes `method` of `interface` on the instance identified by `session_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the instance is gone or the call fails.
    fn invoke(
        &self,
        session_id: &SessionId,
        interface: &InterfaceName,
        method: &str,
        args: &[Value],
    ) -> anyhow::Result<Value>;
}

/// Looks up management contexts by component name.
pub trait ManagementContextProvider: Send + Sync {
    fn context(&self, component_name: &str) -> Option<Arc<dyn ManagementContext>>;
}

// ---------------------------------------------------------------------------
// Name service
// ---------------------------------------------------------------------------

/// Key-to-object directory where handles are published.
pub trait NameService: Send + Sync {
    /// # Errors
    ///
    /// Returns [`LookupError::NotFound`] on a miss.
    fn lookup(&self, key: &str) -> Result<Arc<dyn BusinessProxy>, LookupError>;
}

// ---------------------------------------------------------------------------
// Registrar
// ---------------------------------------------------------------------------

/// Type-erased registry entry. Entries hold an `Arc<T>` for the registered
/// `T` (which may itself be a trait object).
pub type RegistryEntry = Arc<dyn Any + Send + Sync>;

/// Object store through which deployed infrastructure (session registrars,
/// proxy factories) is published.
pub trait Registrar: Send + Sync {
    /// # Errors
    ///
    /// Returns [`LookupError::NotFound`] on a miss.
    fn lookup_entry(&self, key: &str) -> Result<RegistryEntry, LookupError>;
}

impl<'a> dyn Registrar + 'a {
    /// Looks up `key` and returns the entry as `Arc<T>`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotFound`] on a miss and
    /// [`LookupError::WrongType`] if the entry was registered as another type.
    pub fn lookup<T>(&self, key: &str) -> Result<Arc<T>, LookupError>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let entry = self.lookup_entry(key)?;
        entry
            .downcast_ref::<Arc<T>>()
            .cloned()
            .ok_or_else(|| LookupError::WrongType {
                key: key.to_string(),
                expected: type_name::<T>(),
            })
    }
}

/// Registrar for stateful session components; knows under which key each
/// view's proxy factory is published.
pub trait SessionRegistrar: Send + Sync {
    /// # Errors
    ///
    /// Returns a [`LookupError`] if the registrar cannot compute a key for
    /// this bean.
    fn proxy_factory_registry_key(
        &self,
        jndi_name: &str,
        metadata: &SessionBeanMetadata,
        is_local: bool,
    ) -> Result<String, LookupError>;
}

/// Proxy factory registered for one view of a stateful component.
pub trait StatefulProxyFactory: Send + Sync {
    /// Creates a business proxy for `interface` bound to `session_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError`] if the proxy cannot be produced.
    fn create_proxy_business(
        &self,
        session_id: &SessionId,
        interface: &InterfaceName,
    ) -> Result<Arc<dyn BusinessProxy>, ProxyError>;
}
