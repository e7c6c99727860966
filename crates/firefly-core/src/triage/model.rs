//! Triage session data models.

use chrono::{DateTime, Utc};

use crate::classify::Suggestion;
use crate::draft::MessageKind;
use crate::message::Message;

/// The fixed menu of actions offered for each message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    /// Move the message to the archive.
    #[default]
    Archive,
    /// Move the message to the trash, after confirmation.
    Delete,
    /// Draft a reply; archive the message if the reply is sent.
    Reply,
    /// Leave the message where it is.
    Skip,
    /// Archive every inbox message received before this one.
    ArchiveAllOlder,
}

impl Action {
    /// All actions, in menu order.
    pub const ALL: [Self; 5] = [
        Self::Archive,
        Self::Delete,
        Self::Reply,
        Self::Skip,
        Self::ArchiveAllOlder,
    ];

    /// Menu key for this action.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Archive => "1",
            Self::Delete => "2",
            Self::Reply => "3",
            Self::Skip => "4",
            Self::ArchiveAllOlder => "5",
        }
    }

    /// Human-readable menu label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Archive => "Archive",
            Self::Delete => "Delete",
            Self::Reply => "Reply",
            Self::Skip => "Skip",
            Self::ArchiveAllOlder => "Archive all older",
        }
    }

    /// Looks up an action by menu key or label (case-insensitive).
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.key() == s || a.label().eq_ignore_ascii_case(s))
    }
}

/// A yes/no question put to the decision source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    /// Second confirmation before moving a message to the trash.
    Delete,
    /// The send gate's confirmation for a draft.
    Send {
        /// Channel of the draft.
        kind: MessageKind,
        /// Who it would go to.
        recipient: String,
    },
    /// Confirmation before archiving every older inbox message.
    ArchiveOlder {
        /// How many messages would be archived.
        count: usize,
    },
    /// Whether to move on to the next message.
    Continue,
}

impl Confirmation {
    /// Question text shown to a human.
    #[must_use]
    pub fn question(&self) -> String {
        match self {
            Self::Delete => "Are you sure you want to delete this email?".to_string(),
            Self::Send { kind, recipient } => format!(
                "Ready to send this {kind} to {recipient}? Do you want me to send this message?"
            ),
            Self::ArchiveOlder { count } => {
                format!("Found {count} older emails. Archive all older emails?")
            }
            Self::Continue => "Continue to next email?".to_string(),
        }
    }

    /// Answer assumed when the human just presses Enter.
    ///
    /// Destructive and outward-facing confirmations default to no.
    #[must_use]
    pub const fn default_answer(&self) -> bool {
        match self {
            Self::Delete | Self::Send { .. } => false,
            Self::ArchiveOlder { .. } | Self::Continue => true,
        }
    }
}

/// What is shown to the decision maker for one message.
#[derive(Debug, Clone, Copy)]
pub struct Presentation<'a> {
    /// 1-based position in the queue.
    pub position: usize,
    /// Queue length.
    pub total: usize,
    /// The message under review.
    pub message: &'a Message,
    /// The classifier's suggestion.
    pub suggestion: &'a Suggestion,
    /// Time the message was presented; ages are relative to this.
    pub now: DateTime<Utc>,
}

impl Presentation<'_> {
    /// Message age in whole days at presentation time.
    #[must_use]
    pub fn age_days(&self) -> i64 {
        self.message.age_days(self.now)
    }
}

/// Result of applying one action to one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Moved to the archive.
    Archived,
    /// Moved to the trash.
    Deleted,
    /// Delete was not confirmed; nothing changed.
    DeleteDeclined,
    /// Reply sent and original archived.
    RepliedAndArchived,
    /// Reply not confirmed; the draft was kept and the original left alone.
    ReplyKeptAsDraft,
    /// Nothing changed.
    Skipped,
    /// Archive-all-older ran; `archived` is 0 when none were found or the
    /// confirmation was declined.
    ArchivedOlder {
        /// Older inbox messages found.
        found: usize,
        /// Older messages actually archived.
        archived: usize,
    },
    /// The action could not be applied; nothing changed.
    Aborted(String),
}

/// Per-session counters. Only ever incremented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProcessingStats {
    /// Messages presented.
    pub reviewed: u32,
    /// Messages moved to the archive, including bulk and post-reply archives.
    pub archived: u32,
    /// Messages moved to the trash.
    pub deleted: u32,
    /// Replies sent.
    pub responded: u32,
}

/// How a session loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Every message in the queue was presented.
    Completed,
    /// The decision maker chose not to continue.
    Stopped,
}

/// Final report for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Counters at the end of the session.
    pub stats: ProcessingStats,
    /// Messages still in the inbox.
    pub inbox_remaining: usize,
    /// How the loop ended.
    pub end: SessionEnd,
}

impl SessionSummary {
    /// Returns true when the inbox is empty.
    #[must_use]
    pub const fn inbox_zero(&self) -> bool {
        self.inbox_remaining == 0
    }
}
