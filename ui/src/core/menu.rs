//! Links offered by the "edit" dropdown and the roles allowed to see them.

use super::role::{Role, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditLink {
    Projects,
    Users,
    Processes,
}

impl EditLink {
    /// Display order inside the dropdown.
    pub const ALL: [EditLink; 3] = [EditLink::Projects, EditLink::Users, EditLink::Processes];

    pub fn path(self) -> &'static str {
        match self {
            Self::Projects => "/projects",
            Self::Users => "/users",
            Self::Processes => "/processes",
        }
    }

    pub fn allowed_roles(self) -> &'static [Role] {
        match self {
            Self::Projects => &[Role::Admin, Role::ProjectEditor],
            Self::Users => &[Role::Admin],
            Self::Processes => &[Role::Admin, Role::ProcessEditor],
        }
    }

    pub fn allows(self, role: Role) -> bool {
        self.allowed_roles().contains(&role)
    }

    /// Users whose role code is not recognized see nothing.
    pub fn visible_to(self, user: &User) -> bool {
        user.role().is_some_and(|role| self.allows(role))
    }
}

/// Links the given user may see, in display order.
pub fn visible_links(user: &User) -> Vec<EditLink> {
    EditLink::ALL
        .into_iter()
        .filter(|link| link.visible_to(user))
        .collect()
}
