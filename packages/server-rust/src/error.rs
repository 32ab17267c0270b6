//! Error types for business object resolution.

use std::fmt;

use bizobj_core::{InterfaceName, NamingError};

/// Failure reported by a name service or registry collaborator.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("nothing bound under `{key}`")]
    NotFound { key: String },
    #[error("entry bound under `{key}` is not a {expected}")]
    WrongType { key: String, expected: &'static str },
    #[error("lookup of `{key}` failed: {source}")]
    Unavailable {
        key: String,
        #[source]
        source: anyhow::Error,
    },
}

impl LookupError {
    #[must_use]
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    /// Returns `true` for a plain miss, as opposed to a type mismatch or an
    /// unavailable collaborator.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Failure raised by a proxy builder or registered proxy factory.
#[derive(Debug, thiserror::Error)]
#[error("cannot build proxy for {target}: {reason}")]
pub struct ProxyError {
    pub target: InterfaceName,
    pub reason: String,
}

/// Failure of a call forwarded through a business proxy.
#[derive(Debug, thiserror::Error)]
pub enum InvocationError {
    #[error("method `{method}` is not available on {interface}")]
    NoSuchMethod {
        interface: InterfaceName,
        method: String,
    },
    #[error(transparent)]
    Target(#[from] anyhow::Error),
}

/// Step of the stateful legacy path that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionStage {
    /// Looking up the session registrar published for the component.
    Registrar,
    /// Asking the session registrar for the proxy factory key.
    ProxyFactoryKey,
    /// Looking up the proxy factory under that key.
    ProxyFactory,
}

impl fmt::Display for ResolutionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Registrar => "session registrar lookup",
            Self::ProxyFactoryKey => "proxy factory key",
            Self::ProxyFactory => "proxy factory lookup",
        })
    }
}

/// Errors returned by a [`BusinessObjectFactory`](crate::BusinessObjectFactory).
///
/// Every variant is non-retryable: resolution runs against already-deployed
/// state, so repeating the same request yields the same failure.
#[derive(Debug, thiserror::Error)]
pub enum BusinessObjectError {
    /// The caller broke the factory contract (e.g., passed a session id to a
    /// stateless factory).
    #[error("contract violation: {reason}")]
    ContractViolation { reason: &'static str },

    #[error("cannot find business object for interface {interface} on {component}")]
    InterfaceNotFound {
        component: String,
        interface: InterfaceName,
    },

    #[error("failed to look up business object under `{key}`")]
    LookupFailure {
        key: String,
        #[source]
        source: LookupError,
    },

    #[error("{stage} failed for `{key}`")]
    ResolutionFailure {
        stage: ResolutionStage,
        key: String,
        #[source]
        source: LookupError,
    },

    #[error("interface {interface} is not exposed through any view of {component}")]
    UnsupportedView {
        component: String,
        interface: InterfaceName,
    },

    /// The container has no live management context for a deployed component.
    #[error("no management context registered for component {component}")]
    MissingManagementContext { component: String },

    #[error("proxy construction failed for {interface}")]
    ProxyConstruction {
        interface: InterfaceName,
        #[source]
        source: ProxyError,
    },

    /// The resolved object does not implement the requested interface.
    #[error("resolved object does not implement {interface}")]
    ClassCast { interface: InterfaceName },

    #[error(transparent)]
    Naming(#[from] NamingError),
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn resolution_failure_names_stage_and_key() {
        let err = BusinessObjectError::ResolutionFailure {
            stage: ResolutionStage::ProxyFactory,
            key: "ProxyFactory/CartBean/shop/CartBean/remote".to_string(),
            source: LookupError::not_found("ProxyFactory/CartBean/shop/CartBean/remote"),
        };
        assert_eq!(
            err.to_string(),
            "proxy factory lookup failed for `ProxyFactory/CartBean/shop/CartBean/remote`"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn lookup_failure_keeps_naming_error_as_source() {
        let err = BusinessObjectError::LookupFailure {
            key: "Counter/remote".to_string(),
            source: LookupError::not_found("Counter/remote"),
        };
        let source = err.source().unwrap();
        assert_eq!(source.to_string(), "nothing bound under `Counter/remote`");
    }

    #[test]
    fn not_found_is_distinguished() {
        assert!(LookupError::not_found("x").is_not_found());
        let wrong = LookupError::WrongType {
            key: "x".to_string(),
            expected: "proxy factory",
        };
        assert!(!wrong.is_not_found());
    }
}
