use dioxus::prelude::*;

use crate::core::role::User;
use crate::labels::role_label;
use crate::t;

#[component]
pub fn Home() -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let user: Option<User> = try_use_context::<Signal<Option<User>>>().and_then(|u| u());
    let greeting = user.as_ref().map(|u| {
        t!(
            "home-greeting",
            name = u.name.clone(),
            role = role_label(u.role())
        )
    });

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-home",
            h1 { {t!("home-title")} }
            if let Some(greeting) = greeting {
                p { class: "page-home__greeting", "{greeting}" }
                p { {t!("home-hint")} }
            } else {
                p { class: "page__notice", {t!("home-signed-out")} }
            }
        }
    }
}
