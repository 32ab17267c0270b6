//! bizobj server: resolves the handle a caller receives when it asks a
//! deployed session component for one of its business interfaces.
//!
//! Stateless components are resolved through a [`NameService`]; stateful
//! components go through proxy factories published in a [`Registrar`], or
//! get a proxy built directly over their live management context when the
//! no-interface view is requested. [`SessionFactories`] dispatches by
//! session kind.

pub mod config;
pub mod error;
pub mod factory;
pub mod handle;
pub mod observability;
pub mod proxy;
pub mod stores;
pub mod traits;

#[cfg(test)]
mod test_support;

pub use config::{FactoryConfig, NoInterfaceNaming, DEFAULT_REGISTRAR_BIND_NAME};
pub use error::{BusinessObjectError, InvocationError, LookupError, ProxyError, ResolutionStage};
pub use factory::{
    Collaborators, SessionFactories, StatefulBusinessObjectFactory, StatelessBusinessObjectFactory,
};
pub use handle::{BusinessObject, HandleLineage};
pub use traits::{
    BusinessObjectFactory, BusinessProxy, InvocationHandler, ManagementContext,
    ManagementContextProvider, NameService, ProxyBuilder, Registrar, SessionRegistrar,
    StatefulProxyFactory,
};
