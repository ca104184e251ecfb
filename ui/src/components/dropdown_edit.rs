use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::core::menu::visible_links;
use crate::core::panel::{OpenPanel, EDIT_PANEL};
use crate::core::role::User;
use crate::labels::link_label;
use crate::t;

/// The navbar's "Edit" dropdown.
///
/// Stateless: the open panel is owned by the caller and every interaction is
/// reported through `on_panel_change`. The toggle requests this panel (or
/// `Closed` when any panel is open); following a link always requests `Closed`.
/// Links are filtered by the user's role, so an unrecognized role renders an
/// empty panel.
#[component]
pub fn DropDownEdit(
    open_panel: OpenPanel,
    on_panel_change: EventHandler<OpenPanel>,
    user: User,
) -> Element {
    let expanded = open_panel.is_open(EDIT_PANEL);
    let state = open_panel.state_class(EDIT_PANEL);

    let links: Vec<(&'static str, String)> = visible_links(&user)
        .into_iter()
        .map(|link| (link.path(), format!("+ {}", link_label(link))))
        .collect();

    debug!(
        "[nav] DropDownEdit render state={state} role={:?} links={}",
        user.role(),
        links.len()
    );

    rsx! {
        div { class: "dropdown-edit",
            button {
                r#type: "button",
                class: "abm-link",
                aria_expanded: "{expanded}",
                onclick: move |_| on_panel_change.call(open_panel.toggled(EDIT_PANEL)),
                EyeIcon {}
                span { class: "abm-link__label", {t!("dropdown-edit-title")} }
            }

            div { class: "submenu-edit {state}",
                for (path, label) in links {
                    Link {
                        key: "{path}",
                        class: "submenu-edit__link",
                        to: path,
                        onclick: move |_| on_panel_change.call(OpenPanel::dismissed()),
                        "{label}"
                    }
                }
            }
        }
    }
}

#[component]
fn EyeIcon() -> Element {
    rsx! {
        svg {
            class: "abm-link__icon",
            width: "18",
            height: "18",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            "aria-hidden": "true",
            path { d: "M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z" }
            circle { cx: "12", cy: "12", r: "3" }
        }
    }
}
