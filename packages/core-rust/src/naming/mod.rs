//! Name-service key resolution for session bean views.
//!
//! Keys are computed by a pluggable [`BindingPolicy`] carried on each
//! [`Component`]. The resolution rules here decide *which* policy name applies
//! to a requested interface; the policy decides what that name looks like.

pub mod basic;
pub mod template;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::component::Component;
use crate::types::InterfaceName;

pub use basic::BasicBindingPolicy;
pub use template::{BindingTemplates, TemplateBindingPolicy};

// ---------------------------------------------------------------------------
// BindingContext
// ---------------------------------------------------------------------------

/// Metadata fields a binding policy may use to build a name.
#[derive(Debug, Clone, Copy)]
pub struct BindingContext<'a> {
    pub application: Option<&'a str>,
    pub module: &'a str,
    pub ejb_name: &'a str,
    pub bean_class: &'a InterfaceName,
}

impl<'a> BindingContext<'a> {
    /// Borrows the naming-relevant fields of a component's metadata.
    #[must_use]
    pub fn of(component: &'a Component) -> Self {
        let md = component.metadata();
        Self {
            application: md.application.as_deref(),
            module: &md.module,
            ejb_name: &md.ejb_name,
            bean_class: &md.bean_class,
        }
    }
}

// ---------------------------------------------------------------------------
// BindingPolicy
// ---------------------------------------------------------------------------

/// Strategy deciding the name-service keys a session bean is published under.
///
/// Implementations must be deterministic: the same context and interface
/// always yield the same name.
pub trait BindingPolicy: Send + Sync + fmt::Debug {
    /// Short identifier for logs (e.g., `"basic"`).
    fn name(&self) -> &'static str;

    /// Default binding of the remote view.
    fn default_remote_name(&self, ctx: &BindingContext<'_>) -> String;

    /// Default binding of the local view.
    fn default_local_name(&self, ctx: &BindingContext<'_>) -> String;

    /// Binding of one business remote interface.
    fn business_remote_name(&self, ctx: &BindingContext<'_>, interface: &InterfaceName)
        -> String;

    /// Binding of one business local interface.
    fn business_local_name(&self, ctx: &BindingContext<'_>, interface: &InterfaceName) -> String;

    /// Binding reserved for the implementation-type view.
    fn no_interface_name(&self, ctx: &BindingContext<'_>) -> String;
}

/// Serializable selection of a [`BindingPolicy`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BindingPolicyConfig {
    #[default]
    Basic,
    Template(BindingTemplates),
}

impl BindingPolicyConfig {
    /// Builds the configured policy.
    ///
    /// # Errors
    ///
    /// Returns [`NamingError::InvalidTemplate`] if a template fails validation.
    pub fn build(&self) -> Result<Arc<dyn BindingPolicy>, NamingError> {
        match self {
            Self::Basic => Ok(Arc::new(BasicBindingPolicy)),
            Self::Template(templates) => {
                Ok(Arc::new(TemplateBindingPolicy::new(templates.clone())?))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// NamingError
// ---------------------------------------------------------------------------

/// Errors from name resolution and policy construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NamingError {
    #[error("bean {ejb_name} does not carry 3.1 session metadata; it has no no-interface binding")]
    NotNoInterfaceCapable { ejb_name: String },
    #[error("invalid binding template `{template}`: {reason}")]
    InvalidTemplate { template: String, reason: String },
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Remote view binding: explicit `jndi_name`, else the policy default.
#[must_use]
pub fn remote_jndi_name(component: &Component) -> String {
    match &component.metadata().jndi_name {
        Some(name) => name.clone(),
        None => component
            .binding_policy()
            .default_remote_name(&BindingContext::of(component)),
    }
}

/// Local view binding: explicit `local_jndi_name`, else the policy default.
#[must_use]
pub fn local_jndi_name(component: &Component) -> String {
    match &component.metadata().local_jndi_name {
        Some(name) => name.clone(),
        None => component
            .binding_policy()
            .default_local_name(&BindingContext::of(component)),
    }
}

/// Name-service key under which the handle for `interface` is published.
///
/// Business remotes take precedence over business locals. The EJB 2.x local
/// interface maps to the local binding; anything else falls back to the
/// bean's remote binding.
#[must_use]
pub fn resolve(component: &Component, interface: &InterfaceName) -> String {
    let md = component.metadata();
    let policy = component.binding_policy();
    let ctx = BindingContext::of(component);

    let key = if md.business_remotes.contains(interface) {
        policy.business_remote_name(&ctx, interface)
    } else if md.business_locals.contains(interface) {
        policy.business_local_name(&ctx, interface)
    } else if md.local.as_ref() == Some(interface) {
        local_jndi_name(component)
    } else {
        remote_jndi_name(component)
    };

    tracing::trace!(
        component = component.name(),
        interface = %interface,
        policy = policy.name(),
        key = %key,
        "resolved binding"
    );
    key
}

/// Dedicated key of the implementation-type view.
///
/// # Errors
///
/// Returns [`NamingError::NotNoInterfaceCapable`] if the component's metadata
/// is not 3.1-or-later session metadata.
pub fn resolve_no_interface(component: &Component) -> Result<String, NamingError> {
    let md = component.metadata();
    if !md.is_ejb31() {
        return Err(NamingError::NotNoInterfaceCapable {
            ejb_name: md.ejb_name.clone(),
        });
    }
    Ok(component
        .binding_policy()
        .no_interface_name(&BindingContext::of(component)))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{MetadataRevision, SessionBeanMetadata, SessionType};

    fn component(md: SessionBeanMetadata) -> Component {
        Component::new("shop/CartBean", md, Arc::new(BasicBindingPolicy))
    }

    fn cart(revision: MetadataRevision) -> SessionBeanMetadata {
        SessionBeanMetadata::new(
            "CartBean",
            "shop-ejb",
            "com.acme.CartBean",
            SessionType::Stateful,
            revision,
        )
        .with_application("shop")
        .with_business_remote("com.acme.Cart")
        .with_business_local("com.acme.CartLocal")
    }

    #[test]
    fn business_interfaces_get_interface_specific_keys() {
        let c = component(cart(MetadataRevision::Ejb30));
        assert_eq!(
            resolve(&c, &"com.acme.Cart".into()),
            "shop/CartBean/remote-com.acme.Cart"
        );
        assert_eq!(
            resolve(&c, &"com.acme.CartLocal".into()),
            "shop/CartBean/local-com.acme.CartLocal"
        );
    }

    #[test]
    fn remote_declaration_wins_over_local() {
        let md = cart(MetadataRevision::Ejb30).with_business_local("com.acme.Cart");
        let c = component(md);
        assert_eq!(
            resolve(&c, &"com.acme.Cart".into()),
            "shop/CartBean/remote-com.acme.Cart"
        );
    }

    #[test]
    fn undeclared_interface_falls_back_to_remote_binding() {
        let c = component(cart(MetadataRevision::Ejb31 {
            no_interface_view: true,
        }));
        assert_eq!(resolve(&c, &"com.acme.CartBean".into()), "shop/CartBean/remote");
    }

    #[test]
    fn component_local_interface_maps_to_local_binding() {
        let md = cart(MetadataRevision::Ejb30).with_local("com.acme.CartLocalObject");
        let c = component(md);
        assert_eq!(
            resolve(&c, &"com.acme.CartLocalObject".into()),
            "shop/CartBean/local"
        );
    }

    #[test]
    fn explicit_overrides_replace_defaults() {
        let md = cart(MetadataRevision::Ejb30)
            .with_jndi_name("ShoppingCart")
            .with_local_jndi_name("local/ShoppingCart");
        let c = component(md);
        assert_eq!(remote_jndi_name(&c), "ShoppingCart");
        assert_eq!(local_jndi_name(&c), "local/ShoppingCart");
    }

    #[test]
    fn no_interface_key_requires_ejb31_metadata() {
        let c = component(cart(MetadataRevision::Ejb30));
        let err = resolve_no_interface(&c).unwrap_err();
        assert_eq!(
            err,
            NamingError::NotNoInterfaceCapable {
                ejb_name: "CartBean".to_string()
            }
        );

        let c = component(cart(MetadataRevision::Ejb31 {
            no_interface_view: true,
        }));
        assert_eq!(resolve_no_interface(&c).unwrap(), "shop/CartBean/no-interface");
    }

    #[test]
    fn policy_is_swappable_without_changing_rules() {
        let templates = BindingTemplates {
            default_remote: "java:global/{application}/{module}/{ejb_name}".to_string(),
            default_local: "java:app/{module}/{ejb_name}".to_string(),
            business_remote: "java:global/{application}/{module}/{ejb_name}!{interface}"
                .to_string(),
            business_local: "java:app/{module}/{ejb_name}!{interface}".to_string(),
            no_interface: "java:global/{application}/{module}/{ejb_name}!{bean_class}".to_string(),
        };
        let policy = BindingPolicyConfig::Template(templates).build().unwrap();
        let c = Component::new(
            "shop/CartBean",
            cart(MetadataRevision::Ejb31 {
                no_interface_view: true,
            }),
            policy,
        );

        assert_eq!(
            resolve(&c, &"com.acme.Cart".into()),
            "java:global/shop/shop-ejb/CartBean!com.acme.Cart"
        );
        assert_eq!(
            resolve_no_interface(&c).unwrap(),
            "java:global/shop/shop-ejb/CartBean!com.acme.CartBean"
        );
    }

    #[test]
    fn default_config_builds_basic_policy() {
        let policy = BindingPolicyConfig::default().build().unwrap();
        assert_eq!(policy.name(), "basic");
    }
}
