//! Shared UI crate for the ABM admin shell. Cross-platform logic and views live here.

pub mod core;
pub mod i18n;
pub mod views;

mod labels;

pub mod components {
    // Role-gated "Edit" dropdown (components/dropdown_edit.rs)
    pub mod dropdown_edit;
    pub use dropdown_edit::DropDownEdit;

    // Localized application navbar hosting the dropdowns (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}
