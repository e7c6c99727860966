//! Folder model.

use serde::{Deserialize, Serialize};

/// The fixed set of folders a message can be filed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Folder {
    /// Messages awaiting triage.
    #[default]
    Inbox,
    /// Processed messages worth keeping.
    Archive,
    /// Deleted messages; purged only on request.
    Trash,
    /// Copies of sent drafts.
    Sent,
}

impl Folder {
    /// All folders, in display order.
    pub const ALL: [Self; 4] = [Self::Inbox, Self::Archive, Self::Trash, Self::Sent];

    /// Convert to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inbox => "inbox",
            Self::Archive => "archive",
            Self::Trash => "trash",
            Self::Sent => "sent",
        }
    }
}

impl std::fmt::Display for Folder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
