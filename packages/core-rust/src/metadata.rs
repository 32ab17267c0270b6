//! Session bean metadata as seen by business object resolution.
//!
//! Loading and parsing deployment descriptors happens elsewhere; this module
//! only models the fields resolution reads and the interface sets derived
//! from them.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::InterfaceName;

/// Kind of session component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    Stateless,
    Stateful,
    Singleton,
}

/// Revision of the session bean metadata model.
///
/// Only 3.1-or-later metadata can carry the no-interface view flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "revision", rename_all = "snake_case")]
pub enum MetadataRevision {
    /// Legacy session bean metadata.
    Ejb30,
    /// Session bean 3.1 (or later) metadata.
    Ejb31 {
        /// Whether the implementation type is exposed as a view.
        #[serde(default)]
        no_interface_view: bool,
    },
}

/// Metadata of one deployed session bean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionBeanMetadata {
    /// Bean name, unique within its module.
    pub ejb_name: String,
    /// Enclosing application, if the module is packaged inside one.
    #[serde(default)]
    pub application: Option<String>,
    /// Module the bean was deployed from.
    pub module: String,
    /// Implementation type.
    pub bean_class: InterfaceName,
    pub session_type: SessionType,
    /// EJB 2.x remote component interface.
    #[serde(default)]
    pub remote: Option<InterfaceName>,
    /// EJB 2.x local component interface.
    #[serde(default)]
    pub local: Option<InterfaceName>,
    #[serde(default)]
    pub business_remotes: BTreeSet<InterfaceName>,
    #[serde(default)]
    pub business_locals: BTreeSet<InterfaceName>,
    /// Explicit remote binding, overriding the policy default.
    #[serde(default)]
    pub jndi_name: Option<String>,
    /// Explicit local binding, overriding the policy default.
    #[serde(default)]
    pub local_jndi_name: Option<String>,
    pub revision: MetadataRevision,
}

impl SessionBeanMetadata {
    /// Creates metadata with no declared interfaces and no binding overrides.
    #[must_use]
    pub fn new(
        ejb_name: impl Into<String>,
        module: impl Into<String>,
        bean_class: impl Into<InterfaceName>,
        session_type: SessionType,
        revision: MetadataRevision,
    ) -> Self {
        Self {
            ejb_name: ejb_name.into(),
            application: None,
            module: module.into(),
            bean_class: bean_class.into(),
            session_type,
            remote: None,
            local: None,
            business_remotes: BTreeSet::new(),
            business_locals: BTreeSet::new(),
            jndi_name: None,
            local_jndi_name: None,
            revision,
        }
    }

    #[must_use]
    pub fn with_application(mut self, application: impl Into<String>) -> Self {
        self.application = Some(application.into());
        self
    }

    #[must_use]
    pub fn with_business_remote(mut self, interface: impl Into<InterfaceName>) -> Self {
        self.business_remotes.insert(interface.into());
        self
    }

    #[must_use]
    pub fn with_business_local(mut self, interface: impl Into<InterfaceName>) -> Self {
        self.business_locals.insert(interface.into());
        self
    }

    #[must_use]
    pub fn with_remote(mut self, interface: impl Into<InterfaceName>) -> Self {
        self.remote = Some(interface.into());
        self
    }

    #[must_use]
    pub fn with_local(mut self, interface: impl Into<InterfaceName>) -> Self {
        self.local = Some(interface.into());
        self
    }

    #[must_use]
    pub fn with_jndi_name(mut self, name: impl Into<String>) -> Self {
        self.jndi_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_local_jndi_name(mut self, name: impl Into<String>) -> Self {
        self.local_jndi_name = Some(name.into());
        self
    }

    /// `true` for 3.1-or-later metadata, whatever its no-interface flag says.
    #[must_use]
    pub fn is_ejb31(&self) -> bool {
        matches!(self.revision, MetadataRevision::Ejb31 { .. })
    }

    /// `true` when the implementation type is published as a view.
    #[must_use]
    pub fn is_no_interface_view(&self) -> bool {
        matches!(
            self.revision,
            MetadataRevision::Ejb31 {
                no_interface_view: true
            }
        )
    }

    /// Remote component interface together with the business remotes.
    #[must_use]
    pub fn remote_interfaces(&self) -> BTreeSet<&InterfaceName> {
        self.remote.iter().chain(&self.business_remotes).collect()
    }

    /// Local component interface together with the business locals.
    #[must_use]
    pub fn local_interfaces(&self) -> BTreeSet<&InterfaceName> {
        self.local.iter().chain(&self.business_locals).collect()
    }

    /// Names a stateless caller may request: business remotes and locals,
    /// plus the implementation type when the no-interface view is enabled.
    #[must_use]
    pub fn business_interface_names(&self) -> BTreeSet<&InterfaceName> {
        let mut names: BTreeSet<&InterfaceName> = self
            .business_remotes
            .iter()
            .chain(&self.business_locals)
            .collect();
        if self.is_no_interface_view() {
            names.insert(&self.bean_class);
        }
        names
    }
}
