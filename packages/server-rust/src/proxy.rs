//! Reflection-free proxies over live management contexts.
//!
//! [`InterceptionBinding`] records which context, session and interface a
//! proxy forwards to; [`InterfaceProxy`] is the adapter a [`DynamicProxyBuilder`]
//! generates for one target type.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use bizobj_core::{InterfaceName, SessionId};
use serde_json::Value;

use crate::error::{InvocationError, ProxyError};
use crate::traits::{
    BusinessProxy, InvocationHandler, ManagementContext, ProxyBuilder, StatefulProxyFactory,
};

// ---------------------------------------------------------------------------
// InterceptionBinding
// ---------------------------------------------------------------------------

/// Invocation handler bound to one live component instance.
///
/// Every call is forwarded to the management context together with the
/// session id and the interface the handle was requested as.
#[derive(Debug, Clone)]
pub struct InterceptionBinding {
    context: Arc<dyn ManagementContext>,
    session_id: SessionId,
    interface: InterfaceName,
}

impl InterceptionBinding {
    #[must_use]
    pub fn new(
        context: Arc<dyn ManagementContext>,
        session_id: SessionId,
        interface: InterfaceName,
    ) -> Self {
        Self {
            context,
            session_id,
            interface,
        }
    }

    /// Name of the management context calls are forwarded to.
    #[must_use]
    pub fn context_name(&self) -> &str {
        self.context.name()
    }

    #[must_use]
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    #[must_use]
    pub fn interface(&self) -> &InterfaceName {
        &self.interface
    }
}

impl InvocationHandler for InterceptionBinding {
    fn invoke(&self, method: &str, args: &[Value]) -> Result<Value, InvocationError> {
        tracing::trace!(
            context = self.context.name(),
            session_id = %self.session_id,
            interface = %self.interface,
            method,
            "forwarding invocation"
        );
        Ok(self
            .context
            .invoke(&self.session_id, &self.interface, method, args)?)
    }
}

// ---------------------------------------------------------------------------
// InterfaceProxy
// ---------------------------------------------------------------------------

/// Proxy implementing exactly one target type.
#[derive(Debug)]
pub struct InterfaceProxy {
    target: InterfaceName,
    /// Methods declared by the target type; `None` accepts any method.
    methods: Option<Arc<BTreeSet<String>>>,
    handler: Arc<dyn InvocationHandler>,
}

impl InterfaceProxy {
    #[must_use]
    pub fn new(
        target: InterfaceName,
        methods: Option<Arc<BTreeSet<String>>>,
        handler: Arc<dyn InvocationHandler>,
    ) -> Self {
        Self {
            target,
            methods,
            handler,
        }
    }
}

impl BusinessProxy for InterfaceProxy {
    fn implements(&self, interface: &InterfaceName) -> bool {
        &self.target == interface
    }

    fn invoke(&self, method: &str, args: &[Value]) -> Result<Value, InvocationError> {
        if let Some(methods) = &self.methods {
            if !methods.contains(method) {
                return Err(InvocationError::NoSuchMethod {
                    interface: self.target.clone(),
                    method: method.to_string(),
                });
            }
        }
        self.handler.invoke(method, args)
    }
}

// ---------------------------------------------------------------------------
// DynamicProxyBuilder
// ---------------------------------------------------------------------------

/// [`ProxyBuilder`] producing [`InterfaceProxy`] adapters.
///
/// Types registered through [`with_methods`](Self::with_methods) get proxies
/// that reject undeclared methods; other types accept any method name.
#[derive(Debug, Default)]
pub struct DynamicProxyBuilder {
    catalog: HashMap<InterfaceName, Arc<BTreeSet<String>>>,
}

impl DynamicProxyBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares the methods of `target`.
    #[must_use]
    pub fn with_methods<I, S>(mut self, target: impl Into<InterfaceName>, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let methods = methods.into_iter().map(Into::into).collect();
        self.catalog.insert(target.into(), Arc::new(methods));
        self
    }
}

impl ProxyBuilder for DynamicProxyBuilder {
    fn build(
        &self,
        target: &InterfaceName,
        handler: Arc<dyn InvocationHandler>,
    ) -> Result<Arc<dyn BusinessProxy>, ProxyError> {
        if target.as_str().is_empty() {
            return Err(ProxyError {
                target: target.clone(),
                reason: "target type name is empty".to_string(),
            });
        }
        Ok(Arc::new(InterfaceProxy::new(
            target.clone(),
            self.catalog.get(target).cloned(),
            handler,
        )))
    }
}

// ---------------------------------------------------------------------------
// ContextProxyFactory
// ---------------------------------------------------------------------------

/// [`StatefulProxyFactory`] building proxies over one component's live
/// context. Registered per view so the legacy resolution path can be wired
/// without a separate remoting layer.
pub struct ContextProxyFactory {
    context: Arc<dyn ManagementContext>,
    builder: Arc<dyn ProxyBuilder>,
}

impl ContextProxyFactory {
    #[must_use]
    pub fn new(context: Arc<dyn ManagementContext>, builder: Arc<dyn ProxyBuilder>) -> Self {
        Self { context, builder }
    }
}

impl StatefulProxyFactory for ContextProxyFactory {
    fn create_proxy_business(
        &self,
        session_id: &SessionId,
        interface: &InterfaceName,
    ) -> Result<Arc<dyn BusinessProxy>, ProxyError> {
        let binding = InterceptionBinding::new(
            self.context.clone(),
            session_id.clone(),
            interface.clone(),
        );
        self.builder.build(interface, Arc::new(binding))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
