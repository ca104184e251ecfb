//! Framework-independent building blocks: roles, panel state, menu table and the
//! persisted session.

pub mod menu;
pub mod panel;
pub mod role;
pub mod session;
