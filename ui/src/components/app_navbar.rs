use crate::components::DropDownEdit;
use crate::core::panel::OpenPanel;
use crate::core::role::User;
use crate::core::session;
use crate::i18n::{self};
use crate::t;
use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Localized application navbar.
///
/// Owns the open-panel state shared by the navbar dropdowns. The signed-in user
/// is read from a `Signal<Option<User>>` context provided by the platform crate;
/// without a user only the home link and locale switcher are shown. Signing out
/// clears the persisted session and the context.
///
/// A `Signal<String>` language code context, when present, is updated on locale
/// changes so that other views re-render with the new bundle.
#[component]
pub fn AppNavbar() -> Element {
    i18n::init();

    let mut open_panel = use_signal(OpenPanel::default);
    // Seeded from the negotiated language, not the fallback.
    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;

    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Reactive dependency on the global language code (if provided)
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let user_ctx: Option<Signal<Option<User>>> = try_use_context::<Signal<Option<User>>>();
    let user: Option<User> = user_ctx.and_then(|u| u());

    debug!(
        "[nav] AppNavbar render lang={_lang_marker} signed_in={}",
        user.is_some()
    );

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        if i18n::set_language(&val).is_ok() {
            current_lang.set(val.clone());
            if let Some(mut code) = lang_code_ctx {
                code.set(val);
            }
        }
    };

    let on_sign_out = move |_: MouseEvent| {
        if let Err(err) = session::clear() {
            warn!("[session] could not clear stored user ({err})");
        }
        open_panel.set(OpenPanel::dismissed());
        if let Some(mut ctx) = user_ctx {
            ctx.set(None);
        }
    };

    let tagline = t!("tagline");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-mark", "ABM" }
                    span { class: "navbar__brand-subtitle", "{tagline}" }
                }

                nav { class: "navbar__links",
                    Link {
                        class: "navbar__link",
                        to: "/",
                        onclick: move |_| open_panel.set(OpenPanel::dismissed()),
                        {t!("nav-home")}
                    }
                    if let Some(user) = user {
                        DropDownEdit {
                            open_panel: open_panel(),
                            on_panel_change: move |next| open_panel.set(next),
                            user: user,
                        }
                        button {
                            r#type: "button",
                            class: "navbar__link navbar__sign-out",
                            onclick: on_sign_out,
                            {t!("nav-sign-out")}
                        }
                    }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
