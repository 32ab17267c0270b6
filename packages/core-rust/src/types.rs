use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Fully-qualified name of a business interface or implementation type.
///
/// Membership tests against a component's published interfaces are plain
/// string equality on this name; no runtime type introspection is involved.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterfaceName(String);

impl InterfaceName {
    /// Wraps a fully-qualified type name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the fully-qualified name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InterfaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for InterfaceName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for InterfaceName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for InterfaceName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Opaque identifier correlating a handle to one stateful instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Access path through which a requested interface reaches a component.
///
/// Computed fresh on every resolution from live metadata; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewType {
    /// Declared remote or business-remote interface.
    Remote,
    /// Declared local or business-local interface.
    Local,
    /// The implementation type itself, exposed without a declared interface.
    NoInterface,
    /// None of the above.
    Unknown,
}

impl ViewType {
    /// Stable lowercase label used in log fields.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Local => "local",
            Self::NoInterface => "no_interface",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
