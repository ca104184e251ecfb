//! Which navbar dropdown is currently expanded.

/// Identifier of a dropdown panel in the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PanelId(pub u8);

/// The "edit" dropdown (projects / users / processes).
pub const EDIT_PANEL: PanelId = PanelId(2);

/// Open-panel state shared by every dropdown in the navbar.
///
/// Owned by the navbar host; dropdowns only read it and request a new value
/// through their change callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenPanel {
    #[default]
    Closed,
    Open(PanelId),
}

impl OpenPanel {
    /// State requested by a dropdown's toggle control.
    ///
    /// From `Closed` the dropdown opens itself. From any open state, including
    /// another dropdown being open, the result is `Closed`.
    pub fn toggled(self, id: PanelId) -> Self {
        match self {
            Self::Closed => Self::Open(id),
            Self::Open(_) => Self::Closed,
        }
    }

    /// State requested when a link inside a dropdown is followed.
    pub fn dismissed() -> Self {
        Self::Closed
    }

    pub fn is_open(self, id: PanelId) -> bool {
        self == Self::Open(id)
    }

    /// CSS state class for the panel body.
    pub fn state_class(self, id: PanelId) -> &'static str {
        if self.is_open(id) {
            "open"
        } else {
            "closed"
        }
    }
}
