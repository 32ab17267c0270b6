//! Business objects of stateful (session-id-bearing) components.
//!
//! Remote and local views go through the proxy factory the container
//! registered for the bean (legacy path). The no-interface view is built
//! directly over the component's live management context.

use std::sync::Arc;

use bizobj_core::{classify, naming, Component, InterfaceName, SessionId, ViewType};
use tracing::{debug, debug_span, error};

use crate::error::{BusinessObjectError, ResolutionStage};
use crate::handle::{BusinessObject, HandleLineage};
use crate::proxy::InterceptionBinding;
use crate::traits::{
    BusinessObjectFactory, ManagementContextProvider, ProxyBuilder, Registrar, SessionRegistrar,
    StatefulProxyFactory,
};

/// Resolves stateful business objects by view type.
pub struct StatefulBusinessObjectFactory {
    registrar: Arc<dyn Registrar>,
    contexts: Arc<dyn ManagementContextProvider>,
    proxy_builder: Arc<dyn ProxyBuilder>,
    /// Registrar bind name for components that do not carry their own.
    default_registrar_bind_name: String,
}

impl StatefulBusinessObjectFactory {
    #[must_use]
    pub fn new(
        registrar: Arc<dyn Registrar>,
        contexts: Arc<dyn ManagementContextProvider>,
        proxy_builder: Arc<dyn ProxyBuilder>,
        default_registrar_bind_name: impl Into<String>,
    ) -> Self {
        Self {
            registrar,
            contexts,
            proxy_builder,
            default_registrar_bind_name: default_registrar_bind_name.into(),
        }
    }

    /// Builds a handle through the proxy factory registered for the view.
    fn create_legacy_business_object(
        &self,
        component: &Component,
        session_id: &SessionId,
        interface: &InterfaceName,
        view: ViewType,
    ) -> Result<BusinessObject, BusinessObjectError> {
        let is_local = view == ViewType::Local;
        let md = component.metadata();

        let registrar_key = component
            .registrar_bind_name()
            .unwrap_or(self.default_registrar_bind_name.as_str());
        let session_registrar = self
            .registrar
            .lookup::<dyn SessionRegistrar>(registrar_key)
            .map_err(|source| BusinessObjectError::ResolutionFailure {
                stage: ResolutionStage::Registrar,
                key: registrar_key.to_string(),
                source,
            })?;

        let jndi_name = if is_local {
            naming::local_jndi_name(component)
        } else {
            naming::remote_jndi_name(component)
        };

        let factory_key = session_registrar
            .proxy_factory_registry_key(&jndi_name, md, is_local)
            .map_err(|source| BusinessObjectError::ResolutionFailure {
                stage: ResolutionStage::ProxyFactoryKey,
                key: jndi_name.clone(),
                source,
            })?;
        debug!(jndi_name = %jndi_name, factory_key = %factory_key, "resolved proxy factory key");

        let proxy_factory = self
            .registrar
            .lookup::<dyn StatefulProxyFactory>(&factory_key)
            .map_err(|source| BusinessObjectError::ResolutionFailure {
                stage: ResolutionStage::ProxyFactory,
                key: factory_key.clone(),
                source,
            })?;

        let proxy = proxy_factory
            .create_proxy_business(session_id, interface)
            .map_err(|source| BusinessObjectError::ProxyConstruction {
                interface: interface.clone(),
                source,
            })?;

        BusinessObject::cast(proxy, interface, view, HandleLineage::ProxyFactory)
    }

    /// Builds a proxy of the implementation type over the live context.
    fn create_no_interface_view(
        &self,
        component: &Component,
        session_id: &SessionId,
        interface: &InterfaceName,
    ) -> Result<BusinessObject, BusinessObjectError> {
        let bean_class = &component.metadata().bean_class;

        let Some(context) = self.contexts.context(component.name()) else {
            error!(
                component = component.name(),
                "deployed component has no management context"
            );
            return Err(BusinessObjectError::MissingManagementContext {
                component: component.name().to_string(),
            });
        };

        let binding = InterceptionBinding::new(context, session_id.clone(), interface.clone());
        debug!(
            context = binding.context_name(),
            session_id = %binding.session_id(),
            interface = %binding.interface(),
            "bound interception to live context"
        );
        let proxy = self
            .proxy_builder
            .build(bean_class, Arc::new(binding))
            .map_err(|source| BusinessObjectError::ProxyConstruction {
                interface: bean_class.clone(),
                source,
            })?;
        debug!(bean_class = %bean_class, "built no-interface proxy");

        BusinessObject::cast(
            proxy,
            interface,
            ViewType::NoInterface,
            HandleLineage::NoInterfaceProxy,
        )
    }
}

impl BusinessObjectFactory for StatefulBusinessObjectFactory {
    fn create_business_object(
        &self,
        component: &Component,
        session_id: Option<&SessionId>,
        interface: &InterfaceName,
    ) -> Result<BusinessObject, BusinessObjectError> {
        let Some(session_id) = session_id else {
            return Err(BusinessObjectError::ContractViolation {
                reason: "session id is required for a stateful component",
            });
        };

        let view = classify(component, interface);
        let span = debug_span!(
            "create_business_object",
            component = component.name(),
            interface = %interface,
            kind = "stateful",
            view = view.as_str(),
        );
        let _guard = span.enter();

        match view {
            ViewType::Remote | ViewType::Local => {
                self.create_legacy_business_object(component, session_id, interface, view)
            }
            ViewType::NoInterface => self.create_no_interface_view(component, session_id, interface),
            ViewType::Unknown => Err(BusinessObjectError::UnsupportedView {
                component: component.name().to_string(),
                interface: interface.clone(),
            }),
        }
    }
}
