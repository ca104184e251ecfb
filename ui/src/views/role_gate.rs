use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::core::menu::EditLink;
use crate::core::role::User;
use crate::t;

/// Renders `children` only for users the edit menu would show `link` to.
///
/// Direct navigation to a section follows the same role matrix as the menu.
#[component]
pub fn RoleGate(link: EditLink, children: Element) -> Element {
    let user: Option<User> = try_use_context::<Signal<Option<User>>>().and_then(|u| u());
    let allowed = user.as_ref().is_some_and(|u| link.visible_to(u));

    if !allowed {
        debug!("[nav] access to {} denied", link.path());
    }

    rsx! {
        if allowed {
            {children}
        } else {
            p { class: "page__notice page__notice--denied", {t!("access-denied")} }
        }
    }
}
