//! Localized display names for domain values.

use crate::core::menu::EditLink;
use crate::core::role::Role;
use crate::t;

pub(crate) fn role_label(role: Option<Role>) -> String {
    match role {
        Some(Role::Admin) => t!("role-admin"),
        Some(Role::ProjectEditor) => t!("role-project-editor"),
        Some(Role::ProcessEditor) => t!("role-process-editor"),
        None => t!("role-unknown"),
    }
}

pub(crate) fn link_label(link: EditLink) -> String {
    match link {
        EditLink::Projects => t!("dropdown-edit-projects"),
        EditLink::Users => t!("dropdown-edit-users"),
        EditLink::Processes => t!("dropdown-edit-processes"),
    }
}
