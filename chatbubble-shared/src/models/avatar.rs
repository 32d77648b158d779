use serde::{Deserialize, Serialize};

use super::Role;

/// Avatar image references for the two transcript participants.
///
/// Both sides are optional; a missing reference means the rendering layer
/// falls back to a default glyph for that role. Loading and caching of the
/// referenced images is left to the browser.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AvatarSet {
    /// Image URL shown next to user messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    /// Image URL shown next to assistant messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assistant: Option<String>,
}

impl AvatarSet {
    /// Selects the avatar reference for a message of the given role.
    #[must_use]
    pub fn for_role(&self, role: Role) -> Option<&str> {
        match role {
            Role::User => self.user.as_deref(),
            Role::Assistant => self.assistant.as_deref(),
        }
    }
}
