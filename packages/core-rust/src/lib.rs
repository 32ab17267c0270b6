//! `bizobj` core: session component metadata, view classification, and
//! name-service binding policies.
//!
//! Everything in this crate is a pure function of caller-supplied metadata;
//! collaborators (name service, registry, proxies) live in `bizobj-server`.

pub mod classify;
pub mod component;
pub mod metadata;
pub mod naming;
pub mod types;

pub use classify::classify;
pub use component::Component;
pub use metadata::{MetadataRevision, SessionBeanMetadata, SessionType};
pub use naming::{BindingPolicy, BindingPolicyConfig, NamingError};
pub use types::{InterfaceName, SessionId, ViewType};
