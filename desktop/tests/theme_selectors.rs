#![cfg(test)]
/*!
Stylesheet selector lint for the desktop build.

Desktop inlines the shared theme (`ui/assets/theme/main.css`) and, in release
builds, the navbar stylesheet (`ui/assets/styling/navbar.css`). A renamed or
dropped class would only show up as broken styling at runtime, so the selectors
the Rust components emit are checked here.

If you rename a class in a component, update the stylesheet and the lists below.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

const THEME_SELECTORS: &[&str] = &[
    ":root",
    "--color-bg",
    "body {",
    ".page {",
    ".page__notice",
    ".page__notice--denied",
    ".page-home__greeting",
    ".role-matrix",
    ".role-matrix__role",
    ".role-matrix__sections",
    "@media (max-width: 720px)",
];

const NAVBAR_SELECTORS: &[&str] = &[
    ".navbar",
    ".navbar__inner",
    ".navbar__brand-mark",
    ".navbar__links",
    ".navbar__link",
    ".navbar__locale",
    ".navbar__sign-out",
    ".abm-link",
    ".abm-link__icon",
    ".dropdown-edit",
    ".submenu-edit",
    ".submenu-edit__link",
    ".visually-hidden",
];

fn missing<'a>(css: &str, selectors: &[&'a str]) -> Vec<&'a str> {
    selectors
        .iter()
        .copied()
        .filter(|sel| !css.contains(sel))
        .collect()
}

#[test]
fn theme_contains_required_selectors() {
    let missing = missing(THEME_CSS, THEME_SELECTORS);
    assert!(
        missing.is_empty(),
        "Missing {} selector(s) in ui/assets/theme/main.css:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn navbar_contains_required_selectors() {
    let missing = missing(NAVBAR_CSS, NAVBAR_SELECTORS);
    assert!(
        missing.is_empty(),
        "Missing {} selector(s) in ui/assets/styling/navbar.css:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn dropdown_panel_has_both_states() {
    // DropDownEdit toggles between these two classes on the panel body.
    let has_open = NAVBAR_CSS.contains(".submenu-edit.open");
    let has_closed = NAVBAR_CSS.contains(".submenu-edit.closed");
    assert!(
        has_open && has_closed,
        "Dropdown state selectors missing (open: {has_open}, closed: {has_closed})"
    );
}

#[test]
fn stylesheets_not_trivially_empty() {
    for (name, css) in [("main.css", THEME_CSS), ("navbar.css", NAVBAR_CSS)] {
        let non_ws_len = css.chars().filter(|c| !c.is_whitespace()).count();
        assert!(
            non_ws_len > 500,
            "{name} appears unexpectedly small ({non_ws_len} non-whitespace chars)"
        );
    }
}
