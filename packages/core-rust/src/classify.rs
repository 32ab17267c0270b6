//! View-type classification of a requested interface.

use crate::component::Component;
use crate::types::{InterfaceName, ViewType};

/// Decides which access path serves `interface` on `component`.
///
/// First match wins, in this order:
///
/// 1. declared remote or business-remote interface: [`ViewType::Remote`]
/// 2. declared local or business-local interface: [`ViewType::Local`]
/// 3. 3.1 metadata with the no-interface view enabled: [`ViewType::NoInterface`]
/// 4. otherwise [`ViewType::Unknown`]
///
/// Declared views are checked before the no-interface flag so that an
/// implementation type that also appears among the declared interfaces still
/// resolves through its declared view.
#[must_use]
pub fn classify(component: &Component, interface: &InterfaceName) -> ViewType {
    let md = component.metadata();

    if md.remote_interfaces().contains(interface) {
        ViewType::Remote
    } else if md.local_interfaces().contains(interface) {
        ViewType::Local
    } else if md.is_no_interface_view() {
        ViewType::NoInterface
    } else {
        ViewType::Unknown
    }
}
