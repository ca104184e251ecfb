use dioxus::prelude::*;

use crate::core::menu::EditLink;
use crate::views::RoleGate;

#[component]
pub fn Projects() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-projects",
            h1 { {crate::t!("page-projects-title")} }
            RoleGate { link: EditLink::Projects,
                p { {crate::t!("page-projects-intro")} }
            }
        }
    }
}
