//! Error types for the core library.

use thiserror::Error;

use crate::message::MessageId;

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An operation referenced an entity in the wrong state, e.g. archiving a
    /// message that is no longer in the inbox or sending a draft twice.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A message with this identifier is already in the store.
    #[error("Duplicate message: {0}")]
    DuplicateMessage(MessageId),

    /// No message with this identifier is in the store.
    #[error("Message not found: {0}")]
    MessageNotFound(MessageId),

    /// A draft failed validation at composition time.
    #[error("Invalid draft: {0}")]
    InvalidDraft(String),

    /// The session was interrupted at a suspension point.
    #[error("Session interrupted")]
    Interrupted,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns true if the error aborts only the action being attempted.
    ///
    /// The triage session reports these and moves on to the next message;
    /// everything else ends the session.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidState(_) | Self::MessageNotFound(_) | Self::InvalidDraft(_)
        )
    }

    /// Creates an invalid state error.
    #[must_use]
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
