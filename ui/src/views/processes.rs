use dioxus::prelude::*;

use crate::core::menu::EditLink;
use crate::views::RoleGate;

#[component]
pub fn Processes() -> Element {
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-processes",
            h1 { {crate::t!("page-processes-title")} }
            RoleGate { link: EditLink::Processes,
                p { {crate::t!("page-processes-intro")} }
            }
        }
    }
}
