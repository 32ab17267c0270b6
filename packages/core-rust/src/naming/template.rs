//! Configurable binding policy driven by string templates.
//!
//! Templates use `{placeholder}` syntax. Supported placeholders:
//! `{application}`, `{module}`, `{ejb_name}`, `{bean_class}`, and (business
//! templates only) `{interface}`. A missing application renders as an empty
//! segment; repeated and leading slashes are collapsed afterwards.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use super::{BindingContext, BindingPolicy, NamingError};
use crate::types::InterfaceName;

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^{}]*)\}").expect("placeholder pattern is valid"));

static SLASHES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/{2,}").expect("slash pattern is valid"));

const CONTEXT_PLACEHOLDERS: &[&str] = &["application", "module", "ejb_name", "bean_class"];
const INTERFACE_PLACEHOLDER: &str = "interface";

/// The five templates a [`TemplateBindingPolicy`] renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingTemplates {
    pub default_remote: String,
    pub default_local: String,
    pub business_remote: String,
    pub business_local: String,
    pub no_interface: String,
}

/// Binding policy rendering validated [`BindingTemplates`].
#[derive(Debug, Clone)]
pub struct TemplateBindingPolicy {
    templates: BindingTemplates,
}

impl TemplateBindingPolicy {
    /// Validates the templates and builds the policy.
    ///
    /// # Errors
    ///
    /// Returns [`NamingError::InvalidTemplate`] if a template is empty, uses
    /// an unknown placeholder, omits `{interface}` from a business template,
    /// or uses `{interface}` outside one.
    pub fn new(templates: BindingTemplates) -> Result<Self, NamingError> {
        validate(&templates.default_remote, false)?;
        validate(&templates.default_local, false)?;
        validate(&templates.business_remote, true)?;
        validate(&templates.business_local, true)?;
        validate(&templates.no_interface, false)?;
        Ok(Self { templates })
    }

    #[must_use]
    pub fn templates(&self) -> &BindingTemplates {
        &self.templates
    }
}

fn invalid(template: &str, reason: impl Into<String>) -> NamingError {
    NamingError::InvalidTemplate {
        template: template.to_string(),
        reason: reason.into(),
    }
}

fn validate(template: &str, business: bool) -> Result<(), NamingError> {
    if template.trim().is_empty() {
        return Err(invalid(template, "template is empty"));
    }

    let mut has_interface = false;
    for caps in PLACEHOLDER_RE.captures_iter(template) {
        let name = &caps[1];
        if name == INTERFACE_PLACEHOLDER {
            if !business {
                return Err(invalid(
                    template,
                    "{interface} is only available in business templates",
                ));
            }
            has_interface = true;
        } else if !CONTEXT_PLACEHOLDERS.contains(&name) {
            return Err(invalid(template, format!("unknown placeholder {{{name}}}")));
        }
    }

    if business && !has_interface {
        return Err(invalid(template, "business template must contain {interface}"));
    }
    Ok(())
}

fn render(template: &str, ctx: &BindingContext<'_>, interface: Option<&InterfaceName>) -> String {
    let expanded = PLACEHOLDER_RE.replace_all(template, |caps: &Captures<'_>| match &caps[1] {
        "application" => ctx.application.unwrap_or_default().to_string(),
        "module" => ctx.module.to_string(),
        "ejb_name" => ctx.ejb_name.to_string(),
        "bean_class" => ctx.bean_class.to_string(),
        INTERFACE_PLACEHOLDER => interface.map(ToString::to_string).unwrap_or_default(),
        // Rejected by `validate`; keep the text as written.
        _ => caps[0].to_string(),
    });
    let collapsed = SLASHES_RE.replace_all(&expanded, "/");
    collapsed.trim_start_matches('/').to_string()
}

impl BindingPolicy for TemplateBindingPolicy {
    fn name(&self) -> &'static str {
        "template"
    }

    fn default_remote_name(&self, ctx: &BindingContext<'_>) -> String {
        render(&self.templates.default_remote, ctx, None)
    }

    fn default_local_name(&self, ctx: &BindingContext<'_>) -> String {
        render(&self.templates.default_local, ctx, None)
    }

    fn business_remote_name(
        &self,
        ctx: &BindingContext<'_>,
        interface: &InterfaceName,
    ) -> String {
        render(&self.templates.business_remote, ctx, Some(interface))
    }

    fn business_local_name(&self, ctx: &BindingContext<'_>, interface: &InterfaceName) -> String {
        render(&self.templates.business_local, ctx, Some(interface))
    }

    fn no_interface_name(&self, ctx: &BindingContext<'_>) -> String {
        render(&self.templates.no_interface, ctx, None)
    }
}
