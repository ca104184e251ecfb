//! Role codes carried on the user record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Roles understood by the admin shell.
///
/// The backend encodes them as short numeric strings in the user's `type`
/// field; anything outside this set grants nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// `"0"`: full access.
    Admin,
    /// `"1"`: may edit projects.
    ProjectEditor,
    /// `"2"`: may edit processes.
    ProcessEditor,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::ProjectEditor, Role::ProcessEditor];

    /// Exact match on the wire code. Padding or case variants are not roles.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "0" => Some(Self::Admin),
            "1" => Some(Self::ProjectEditor),
            "2" => Some(Self::ProcessEditor),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Admin => "0",
            Self::ProjectEditor => "1",
            Self::ProcessEditor => "2",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role code `{0}`")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// Signed-in user as handed over by the backend.
///
/// The role code is kept verbatim so an unrecognized value survives a
/// load/store cycle; it simply maps to no role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "type")]
    pub role_code: String,
}

impl User {
    pub fn with_role_code<T: Into<String>>(code: T) -> Self {
        Self {
            role_code: code.into(),
            ..Self::default()
        }
    }

    pub fn role(&self) -> Option<Role> {
        Role::from_code(&self.role_code)
    }
}
