//! Business objects of stateless (session-id-less) components.

use std::sync::Arc;

use bizobj_core::{classify, naming, Component, InterfaceName, SessionId};
use tracing::{debug, debug_span};

use crate::config::NoInterfaceNaming;
use crate::error::BusinessObjectError;
use crate::handle::{BusinessObject, HandleLineage};
use crate::traits::{BusinessObjectFactory, NameService};

/// Resolves stateless business objects through the name service.
///
/// The requested interface must be one of the bean's business interfaces,
/// or its implementation type when the no-interface view is enabled.
pub struct StatelessBusinessObjectFactory {
    name_service: Arc<dyn NameService>,
    no_interface_naming: NoInterfaceNaming,
}

impl StatelessBusinessObjectFactory {
    #[must_use]
    pub fn new(name_service: Arc<dyn NameService>, no_interface_naming: NoInterfaceNaming) -> Self {
        Self {
            name_service,
            no_interface_naming,
        }
    }

    /// Name-service key for an interface already known to be published.
    fn key_for(
        &self,
        component: &Component,
        interface: &InterfaceName,
    ) -> Result<String, BusinessObjectError> {
        let md = component.metadata();
        let dedicated = self.no_interface_naming == NoInterfaceNaming::Dedicated
            && md.is_no_interface_view()
            && &md.bean_class == interface;

        if dedicated {
            Ok(naming::resolve_no_interface(component)?)
        } else {
            Ok(naming::resolve(component, interface))
        }
    }
}

impl BusinessObjectFactory for StatelessBusinessObjectFactory {
    fn create_business_object(
        &self,
        component: &Component,
        session_id: Option<&SessionId>,
        interface: &InterfaceName,
    ) -> Result<BusinessObject, BusinessObjectError> {
        if session_id.is_some() {
            return Err(BusinessObjectError::ContractViolation {
                reason: "session id must be absent for a stateless component",
            });
        }

        let span = debug_span!(
            "create_business_object",
            component = component.name(),
            interface = %interface,
            kind = "stateless",
        );
        let _guard = span.enter();

        let md = component.metadata();
        if !md.business_interface_names().contains(interface) {
            return Err(BusinessObjectError::InterfaceNotFound {
                component: component.name().to_string(),
                interface: interface.clone(),
            });
        }

        let key = self.key_for(component, interface)?;
        debug!(key = %key, strategy = ?self.no_interface_naming, "looking up business object");

        let proxy = self
            .name_service
            .lookup(&key)
            .map_err(|source| BusinessObjectError::LookupFailure {
                key: key.clone(),
                source,
            })?;

        BusinessObject::cast(
            proxy,
            interface,
            classify(component, interface),
            HandleLineage::NameService,
        )
    }
}
