use dioxus::prelude::*;

use crate::core::menu::EditLink;
use crate::core::role::Role;
use crate::labels::{link_label, role_label};
use crate::views::RoleGate;

#[component]
pub fn Users() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    // Role reference table: which edit sections each role can open.
    let rows: Vec<(String, String)> = Role::ALL
        .into_iter()
        .map(|role| {
            let sections = EditLink::ALL
                .into_iter()
                .filter(|link| link.allows(role))
                .map(link_label)
                .collect::<Vec<_>>()
                .join(", ");
            (role_label(Some(role)), sections)
        })
        .collect();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-users",
            h1 { {crate::t!("page-users-title")} }
            RoleGate { link: EditLink::Users,
                p { {crate::t!("page-users-intro")} }
                dl { class: "role-matrix",
                    for (role, sections) in rows {
                        dt { class: "role-matrix__role", "{role}" }
                        dd { class: "role-matrix__sections", "{sections}" }
                    }
                }
            }
        }
    }
}
