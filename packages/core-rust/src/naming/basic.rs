//! Default binding policy: `[application/]ejb_name/<view>`.

use super::{BindingContext, BindingPolicy};
use crate::types::InterfaceName;

/// Binds views under the bean name, prefixed by the application when the
/// module is packaged inside one.
///
/// | view             | name                                  |
/// |------------------|---------------------------------------|
/// | remote           | `shop/CartBean/remote`                |
/// | local            | `shop/CartBean/local`                 |
/// | business remote  | `shop/CartBean/remote-com.acme.Cart`  |
/// | business local   | `shop/CartBean/local-com.acme.Cart`   |
/// | no-interface     | `shop/CartBean/no-interface`          |
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicBindingPolicy;

impl BasicBindingPolicy {
    fn base(ctx: &BindingContext<'_>) -> String {
        match ctx.application {
            Some(app) if !app.is_empty() => format!("{app}/{}", ctx.ejb_name),
            _ => ctx.ejb_name.to_string(),
        }
    }
}

impl BindingPolicy for BasicBindingPolicy {
    fn name(&self) -> &'static str {
        "basic"
    }

    fn default_remote_name(&self, ctx: &BindingContext<'_>) -> String {
        format!("{}/remote", Self::base(ctx))
    }

    fn default_local_name(&self, ctx: &BindingContext<'_>) -> String {
        format!("{}/local", Self::base(ctx))
    }

    fn business_remote_name(
        &self,
        ctx: &BindingContext<'_>,
        interface: &InterfaceName,
    ) -> String {
        format!("{}-{interface}", self.default_remote_name(ctx))
    }

    fn business_local_name(&self, ctx: &BindingContext<'_>, interface: &InterfaceName) -> String {
        format!("{}-{interface}", self.default_local_name(ctx))
    }

    fn no_interface_name(&self, ctx: &BindingContext<'_>) -> String {
        format!("{}/no-interface", Self::base(ctx))
    }
}
