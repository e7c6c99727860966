//! Message data models.

use std::collections::BTreeSet;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a message within a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MessageId(String);

impl MessageId {
    /// Create a new message ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single email awaiting triage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier.
    pub id: MessageId,
    /// Sender address.
    pub sender: String,
    /// Subject line.
    pub subject: String,
    /// When the message was received.
    pub received_at: DateTime<Utc>,
    /// Plain text body.
    pub body: String,
    /// Whether the message has been read.
    pub is_read: bool,
    /// Free-form labels.
    pub labels: BTreeSet<String>,
}

impl Message {
    /// Creates a new unread, unlabeled message.
    #[must_use]
    pub fn new(
        id: MessageId,
        sender: impl Into<String>,
        subject: impl Into<String>,
        received_at: DateTime<Utc>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id,
            sender: sender.into(),
            subject: subject.into(),
            received_at,
            body: body.into(),
            is_read: false,
            labels: BTreeSet::new(),
        }
    }

    /// Time elapsed since the message was received, as of `now`.
    #[must_use]
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.received_at
    }

    /// Age in whole days, as of `now`.
    #[must_use]
    pub fn age_days(&self, now: DateTime<Utc>) -> i64 {
        self.age(now).num_days()
    }

    /// The first `max_chars` characters of the body, with an ellipsis when
    /// anything was cut off.
    #[must_use]
    pub fn preview(&self, max_chars: usize) -> String {
        let mut chars = self.body.chars();
        let head: String = chars.by_ref().take(max_chars).collect();
        if chars.next().is_some() {
            format!("{head}...")
        } else {
            head
        }
    }

    /// Returns true if the message carries `label`.
    #[must_use]
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.contains(label)
    }
}
