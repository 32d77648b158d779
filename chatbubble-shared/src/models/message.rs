use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Role, Timestamp};

/// A single entry in a chat transcript.
///
/// Messages are immutable and owned by the host application; the rendering
/// layer only reads them. `sent_at` is captured when the message is created
/// so re-rendering the same transcript always displays the same time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    /// Unique identifier, used for keyed list rendering.
    pub id: Uuid,

    /// Who authored the message.
    pub role: Role,

    /// The message text, rendered verbatim with line breaks preserved.
    pub content: String,

    /// When the message was sent.
    pub sent_at: Timestamp,
}

impl Message {
    /// Creates a message with a fresh identifier.
    #[must_use]
    pub fn new(role: Role, content: impl Into<String>, sent_at: Timestamp) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            sent_at,
        }
    }

    /// Creates a user message sent now.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content, Timestamp::now())
    }

    /// Creates an assistant message sent now.
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content, Timestamp::now())
    }
}
