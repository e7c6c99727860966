//! Draft data models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::message::{Message, MessageId};
use crate::{Error, Result};

/// Unique identifier for a draft.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DraftId(String);

impl DraftId {
    /// Generates a fresh draft ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(format!("draft_{}", uuid::Uuid::new_v4()))
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DraftId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Channel a draft would be delivered over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MessageKind {
    /// Email; requires a subject.
    #[default]
    Email,
    /// SMS/text message; has no subject.
    Sms,
}

impl MessageKind {
    /// Convert to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Sms => "sms",
        }
    }
}

impl std::fmt::Display for MessageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of a draft. Transitions only from `Draft` to `Sent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DraftStatus {
    /// Awaiting confirmation.
    #[default]
    Draft,
    /// Confirmed and sent.
    Sent,
}

impl DraftStatus {
    /// Convert to string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Sent => "sent",
        }
    }
}

/// A message authored by the agent, pending human approval.
///
/// Status and sent timestamp are private so that they can only change
/// together, through the send gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    /// Unique identifier.
    pub id: DraftId,
    /// Delivery channel.
    pub kind: MessageKind,
    /// Recipient address or number.
    pub recipient: String,
    /// Subject line (email only).
    pub subject: Option<String>,
    /// Message body.
    pub body: String,
    /// When the draft was composed.
    pub created_at: DateTime<Utc>,
    status: DraftStatus,
    sent_at: Option<DateTime<Utc>>,
}

impl Draft {
    /// Composes a new draft.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDraft`] if the recipient is blank, or if an
    /// email has no subject.
    pub fn compose(
        kind: MessageKind,
        recipient: impl Into<String>,
        subject: Option<String>,
        body: impl Into<String>,
    ) -> Result<Self> {
        let recipient = recipient.into();
        if recipient.trim().is_empty() {
            return Err(Error::InvalidDraft("recipient is required".into()));
        }

        let subject = match kind {
            MessageKind::Email => match subject {
                Some(s) if !s.trim().is_empty() => Some(s),
                _ => return Err(Error::InvalidDraft("email requires a subject".into())),
            },
            MessageKind::Sms => None,
        };

        Ok(Self {
            id: DraftId::generate(),
            kind,
            recipient,
            subject,
            body: body.into(),
            created_at: Utc::now(),
            status: DraftStatus::Draft,
            sent_at: None,
        })
    }

    /// Composes an email reply to `original`, addressed to its sender.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDraft`] if the original has no sender.
    pub fn reply_to(original: &Message, body: impl Into<String>) -> Result<Self> {
        Self::compose(
            MessageKind::Email,
            original.sender.clone(),
            Some(format!("Re: {}", original.subject)),
            body,
        )
    }

    /// Current status.
    #[must_use]
    pub const fn status(&self) -> DraftStatus {
        self.status
    }

    /// When the draft was sent, if it has been.
    #[must_use]
    pub const fn sent_at(&self) -> Option<DateTime<Utc>> {
        self.sent_at
    }

    /// Returns true once the draft has been sent.
    #[must_use]
    pub const fn is_sent(&self) -> bool {
        matches!(self.status, DraftStatus::Sent)
    }

    /// Moves the draft to `Sent`. Only the send gate calls this.
    pub(crate) fn mark_sent(&mut self, at: DateTime<Utc>) -> Result<()> {
        if self.is_sent() {
            return Err(Error::invalid_state(format!(
                "draft {} was already sent",
                self.id
            )));
        }
        self.status = DraftStatus::Sent;
        self.sent_at = Some(at);
        Ok(())
    }

    /// Builds the copy of a sent draft that is filed into the sent folder.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] if the draft has not been sent.
    pub fn to_sent_message(&self, from: &str) -> Result<Message> {
        let Some(sent_at) = self.sent_at else {
            return Err(Error::invalid_state(format!(
                "draft {} has not been sent",
                self.id
            )));
        };

        let mut message = Message::new(
            MessageId::new(self.id.as_str()),
            from,
            self.subject.clone().unwrap_or_default(),
            sent_at,
            self.body.clone(),
        );
        message.is_read = true;
        message.labels.insert(format!("to:{}", self.recipient));
        Ok(message)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_email_starts_as_draft() {
        let draft = Draft::compose(
            MessageKind::Email,
            "bob@example.com",
            Some("Hello".into()),
            "Hi Bob",
        )
        .unwrap();

        assert_eq!(draft.status(), DraftStatus::Draft);
        assert!(draft.sent_at().is_none());
        assert!(draft.id.as_str().starts_with("draft_"));
    }

    #[test]
    fn test_compose_email_requires_subject() {
        let err = Draft::compose(MessageKind::Email, "bob@example.com", None, "Hi").unwrap_err();
        assert!(matches!(err, Error::InvalidDraft(_)));

        let err = Draft::compose(
            MessageKind::Email,
            "bob@example.com",
            Some("   ".into()),
            "Hi",
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidDraft(_)));
    }

    #[test]
    fn test_compose_requires_recipient() {
        let err = Draft::compose(MessageKind::Sms, " ", None, "Hi").unwrap_err();
        assert!(matches!(err, Error::InvalidDraft(_)));
    }

    #[test]
    fn test_sms_drops_subject() {
        let draft =
            Draft::compose(MessageKind::Sms, "+15550100", Some("ignored".into()), "Hi").unwrap();
        assert!(draft.subject.is_none());
    }

    #[test]
    fn test_reply_prefixes_subject() {
        let original = Message::new(
            MessageId::new("email_1"),
            "support@aws.com",
            "Your AWS bill is ready",
            Utc::now(),
            "",
        );
        let draft = Draft::reply_to(&original, "Thanks").unwrap();

        assert_eq!(draft.recipient, "support@aws.com");
        assert_eq!(draft.subject.as_deref(), Some("Re: Your AWS bill is ready"));
        assert_eq!(draft.kind, MessageKind::Email);
    }

    #[test]
    fn test_mark_sent_is_one_way() {
        let mut draft = Draft::compose(MessageKind::Sms, "+15550100", None, "Hi").unwrap();
        let at = Utc::now();

        draft.mark_sent(at).unwrap();
        assert_eq!(draft.status(), DraftStatus::Sent);
        assert_eq!(draft.sent_at(), Some(at));

        let err = draft.mark_sent(Utc::now()).unwrap_err();
        assert!(matches!(err, Error::InvalidState(_)));
        assert_eq!(draft.sent_at(), Some(at));
    }

    #[test]
    fn test_sent_message_requires_sent_draft() {
        let mut draft = Draft::compose(
            MessageKind::Email,
            "bob@example.com",
            Some("Hello".into()),
            "Hi Bob",
        )
        .unwrap();
        assert!(draft.to_sent_message("me@example.com").is_err());

        draft.mark_sent(Utc::now()).unwrap();
        let copy = draft.to_sent_message("me@example.com").unwrap();
        assert_eq!(copy.id.as_str(), draft.id.as_str());
        assert_eq!(copy.sender, "me@example.com");
        assert_eq!(copy.subject, "Hello");
        assert!(copy.has_label("to:bob@example.com"));
    }

    #[test]
    fn test_message_kind_display() {
        assert_eq!(MessageKind::Email.to_string(), "email");
        assert_eq!(MessageKind::Sms.to_string(), "sms");
    }
}
