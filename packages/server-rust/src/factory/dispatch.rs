//! Routing of business object requests to the factory for a component's
//! session kind.

use std::sync::Arc;

use bizobj_core::{Component, InterfaceName, SessionId, SessionType};
use tracing::trace;

use super::{StatefulBusinessObjectFactory, StatelessBusinessObjectFactory};
use crate::config::FactoryConfig;
use crate::error::BusinessObjectError;
use crate::handle::BusinessObject;
use crate::traits::{
    BusinessObjectFactory, ManagementContextProvider, NameService, ProxyBuilder, Registrar,
};

// ---------------------------------------------------------------------------
// Collaborators
// ---------------------------------------------------------------------------

/// Every collaborator the factories consume, handed over in one piece.
#[derive(Clone)]
pub struct Collaborators {
    pub name_service: Arc<dyn NameService>,
    pub registrar: Arc<dyn Registrar>,
    pub contexts: Arc<dyn ManagementContextProvider>,
    pub proxy_builder: Arc<dyn ProxyBuilder>,
}

// ---------------------------------------------------------------------------
// SessionFactories
// ---------------------------------------------------------------------------

/// One stateless and one stateful factory behind a single entry point.
///
/// Stateless and singleton components go to the stateless factory; stateful
/// components go to the stateful one.
pub struct SessionFactories {
    stateless: StatelessBusinessObjectFactory,
    stateful: StatefulBusinessObjectFactory,
}

impl SessionFactories {
    #[must_use]
    pub fn new(
        stateless: StatelessBusinessObjectFactory,
        stateful: StatefulBusinessObjectFactory,
    ) -> Self {
        Self {
            stateless,
            stateful,
        }
    }

    /// Wires both factories from `config` and `collaborators`.
    #[must_use]
    pub fn from_config(config: &FactoryConfig, collaborators: Collaborators) -> Self {
        let Collaborators {
            name_service,
            registrar,
            contexts,
            proxy_builder,
        } = collaborators;

        Self::new(
            StatelessBusinessObjectFactory::new(name_service, config.no_interface_naming),
            StatefulBusinessObjectFactory::new(
                registrar,
                contexts,
                proxy_builder,
                config.registrar_bind_name.clone(),
            ),
        )
    }

    fn route(&self, session_type: SessionType) -> &dyn BusinessObjectFactory {
        match session_type {
            SessionType::Stateless | SessionType::Singleton => &self.stateless,
            SessionType::Stateful => &self.stateful,
        }
    }
}

impl BusinessObjectFactory for SessionFactories {
    fn create_business_object(
        &self,
        component: &Component,
        session_id: Option<&SessionId>,
        interface: &InterfaceName,
    ) -> Result<BusinessObject, BusinessObjectError> {
        let session_type = component.metadata().session_type;
        trace!(component = component.name(), ?session_type, "dispatching");
        self.route(session_type)
            .create_business_object(component, session_id, interface)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
