//! Recording fakes shared by unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use bizobj_core::{InterfaceName, SessionBeanMetadata, SessionId};
use parking_lot::Mutex;
use serde_json::{json, Value};

use crate::error::{InvocationError, LookupError, ProxyError};
use crate::stores::{ContextRegistry, InMemoryNameService, InMemoryRegistrar};
use crate::traits::{
    BusinessProxy, InvocationHandler, ManagementContext, ManagementContextProvider, NameService,
    ProxyBuilder, Registrar, RegistryEntry, SessionRegistrar,
};

/// One call observed by a [`RecordingContext`].
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub session_id: SessionId,
    pub interface: InterfaceName,
    pub method: String,
    pub args: Vec<Value>,
}

/// Management context that records every invocation and answers
/// `"<name>:<session>:<method>"`.
#[derive(Debug)]
pub struct RecordingContext {
    name: String,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingContext {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().clone()
    }
}

impl ManagementContext for RecordingContext {
    fn name(&self) -> &str {
        &self.name
    }

    fn invoke(
        &self,
        session_id: &SessionId,
        interface: &InterfaceName,
        method: &str,
        args: &[Value],
    ) -> anyhow::Result<Value> {
        self.calls.lock().push(RecordedCall {
            session_id: session_id.clone(),
            interface: interface.clone(),
            method: method.to_string(),
            args: args.to_vec(),
        });
        Ok(json!(format!("{}:{}:{}", self.name, session_id, method)))
    }
}

/// Proxy published in a name service: implements a fixed set of interfaces
/// and answers every call with its label.
#[derive(Debug)]
pub struct FixedProxy {
    pub label: String,
    pub interfaces: Vec<InterfaceName>,
}

impl FixedProxy {
    pub fn new(label: &str, interfaces: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            label: label.to_string(),
            interfaces: interfaces.iter().map(|i| InterfaceName::from(*i)).collect(),
        })
    }
}

impl BusinessProxy for FixedProxy {
    fn implements(&self, interface: &InterfaceName) -> bool {
        self.interfaces.contains(interface)
    }

    fn invoke(&self, _method: &str, _args: &[Value]) -> Result<Value, InvocationError> {
        Ok(json!(self.label))
    }
}

/// Name service counting its lookups.
#[derive(Default)]
pub struct SpyNameService {
    pub inner: InMemoryNameService,
    lookups: Mutex<Vec<String>>,
}

impl SpyNameService {
    pub fn keys(&self) -> Vec<String> {
        self.lookups.lock().clone()
    }
}

impl NameService for SpyNameService {
    fn lookup(&self, key: &str) -> Result<Arc<dyn BusinessProxy>, LookupError> {
        self.lookups.lock().push(key.to_string());
        self.inner.lookup(key)
    }
}

/// Registrar recording looked-up keys.
#[derive(Default)]
pub struct SpyRegistrar {
    pub inner: InMemoryRegistrar,
    lookups: Mutex<Vec<String>>,
}

impl SpyRegistrar {
    pub fn keys(&self) -> Vec<String> {
        self.lookups.lock().clone()
    }
}

impl Registrar for SpyRegistrar {
    fn lookup_entry(&self, key: &str) -> Result<RegistryEntry, LookupError> {
        self.lookups.lock().push(key.to_string());
        self.inner.lookup_entry(key)
    }
}

/// Context provider counting its lookups.
#[derive(Default)]
pub struct SpyContexts {
    pub inner: ContextRegistry,
    lookups: AtomicUsize,
}

impl SpyContexts {
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl ManagementContextProvider for SpyContexts {
    fn context(&self, component_name: &str) -> Option<Arc<dyn ManagementContext>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.inner.context(component_name)
    }
}

/// Proxy builder recording each target type together with the invocation
/// handler the proxy was bound to.
#[derive(Default)]
pub struct RecordingProxyBuilder {
    builds: Mutex<Vec<(InterfaceName, Arc<dyn InvocationHandler>)>>,
}

impl RecordingProxyBuilder {
    pub fn targets(&self) -> Vec<InterfaceName> {
        self.builds.lock().iter().map(|(target, _)| target.clone()).collect()
    }

    pub fn handlers(&self) -> Vec<Arc<dyn InvocationHandler>> {
        self.builds.lock().iter().map(|(_, handler)| handler.clone()).collect()
    }
}

impl ProxyBuilder for RecordingProxyBuilder {
    fn build(
        &self,
        target: &InterfaceName,
        handler: Arc<dyn InvocationHandler>,
    ) -> Result<Arc<dyn BusinessProxy>, ProxyError> {
        self.builds.lock().push((target.clone(), handler.clone()));
        crate::proxy::DynamicProxyBuilder::new().build(target, handler)
    }
}

/// Session registrar recording every key request and answering with
/// `"recorded/<jndi_name>"`, or failing when built with [`Self::failing`].
#[derive(Default)]
pub struct RecordingSessionRegistrar {
    fail: bool,
    requests: Mutex<Vec<(String, bool)>>,
}

impl RecordingSessionRegistrar {
    pub fn failing() -> Self {
        Self {
            fail: true,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// `(jndi_name, is_local)` of each request, in order.
    pub fn requests(&self) -> Vec<(String, bool)> {
        self.requests.lock().clone()
    }
}

impl SessionRegistrar for RecordingSessionRegistrar {
    fn proxy_factory_registry_key(
        &self,
        jndi_name: &str,
        _metadata: &SessionBeanMetadata,
        is_local: bool,
    ) -> Result<String, LookupError> {
        self.requests.lock().push((jndi_name.to_string(), is_local));
        if self.fail {
            return Err(LookupError::not_found(jndi_name));
        }
        Ok(format!("recorded/{jndi_name}"))
    }
}
