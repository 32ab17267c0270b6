//! Business object factories.
//!
//! - [`StatelessBusinessObjectFactory`]: name-service lookup of published handles
//! - [`StatefulBusinessObjectFactory`]: registry-published proxy factories, or a
//!   direct proxy over the live context for the no-interface view
//! - [`SessionFactories`]: routes each request by session kind

pub mod dispatch;
pub mod stateful;
pub mod stateless;

pub use dispatch::{Collaborators, SessionFactories};
pub use stateful::StatefulBusinessObjectFactory;
pub use stateless::StatelessBusinessObjectFactory;
