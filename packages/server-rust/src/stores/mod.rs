//! In-memory collaborators for embedding and tests.
//!
//! - [`InMemoryRegistrar`]: type-erased object store ([`Registrar`](crate::Registrar))
//! - [`InMemoryNameService`]: handle directory ([`NameService`](crate::NameService))
//! - [`ContextRegistry`]: live management contexts by component name
//! - [`DefaultSessionRegistrar`]: proxy factory keys for stateful components

pub mod contexts;
pub mod name_service;
pub mod registrar;
pub mod session_registrar;

pub use contexts::ContextRegistry;
pub use name_service::InMemoryNameService;
pub use registrar::InMemoryRegistrar;
pub use session_registrar::DefaultSessionRegistrar;
