//! The triage session loop.

use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info, warn};

use super::collaborator::{DecisionSource, DisplaySink};
use super::model::{
    Action, Confirmation, Outcome, Presentation, ProcessingStats, SessionEnd, SessionSummary,
};
use crate::classify::Classifier;
use crate::draft::{self, Draft};
use crate::message::{Message, MessageId};
use crate::settings::Settings;
use crate::store::{Folder, FolderStore};
use crate::{Error, Result};

/// Drives messages one at a time through suggestion, decision and folder
/// change.
///
/// One `TriageSession` is one session: its counters start at zero and are
/// never reset. Start a new session to start over.
#[derive(Debug)]
pub struct TriageSession {
    store: FolderStore,
    classifier: Classifier,
    stats: ProcessingStats,
    drafts: Vec<Draft>,
    pause: Duration,
    from_address: String,
}

impl TriageSession {
    /// Creates an empty session with the standard classifier.
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        Self {
            store: FolderStore::new(),
            classifier: Classifier::standard(),
            stats: ProcessingStats::default(),
            drafts: Vec::new(),
            pause: settings.pause(),
            from_address: settings.from_address.clone(),
        }
    }

    /// The folder store.
    #[must_use]
    pub const fn store(&self) -> &FolderStore {
        &self.store
    }

    /// Counters so far.
    #[must_use]
    pub const fn stats(&self) -> ProcessingStats {
        self.stats
    }

    /// Every draft composed this session, sent or not.
    #[must_use]
    pub fn drafts(&self) -> &[Draft] {
        &self.drafts
    }

    /// Files messages into the inbox.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateMessage`] if any identifier repeats or is
    /// already in the store; in that case nothing is filed.
    pub fn import(&mut self, messages: Vec<Message>) -> Result<()> {
        let mut seen = std::collections::HashSet::new();
        for message in &messages {
            if self.store.get(&message.id).is_some() || !seen.insert(&message.id) {
                return Err(Error::DuplicateMessage(message.id.clone()));
            }
        }

        for message in messages {
            self.store.insert(message, Folder::Inbox)?;
        }
        Ok(())
    }

    /// Runs a full session over `messages`, oldest first.
    ///
    /// After every message but the last the decision source is asked whether
    /// to continue; declining stops the loop and leaves the rest untouched.
    /// The summary is shown and returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateMessage`] if the messages cannot be imported,
    /// or [`Error::Interrupted`] (or another non-recoverable error) raised by
    /// a collaborator. Actions already applied stay applied.
    pub async fn run(
        &mut self,
        mut messages: Vec<Message>,
        decisions: &mut dyn DecisionSource,
        display: &mut dyn DisplaySink,
    ) -> Result<SessionSummary> {
        // Stable: equal timestamps keep their input order.
        messages.sort_by_key(|m| m.received_at);
        let queue: Vec<MessageId> = messages.iter().map(|m| m.id.clone()).collect();
        self.import(messages)?;

        let total = queue.len();
        info!(total, "Starting inbox zero session");

        let mut end = SessionEnd::Completed;
        for (idx, id) in queue.iter().enumerate() {
            self.process(id, idx + 1, total, decisions, display).await?;

            if idx + 1 < total && !decisions.confirm(&Confirmation::Continue)? {
                info!(reviewed = self.stats.reviewed, "Session stopped early");
                end = SessionEnd::Stopped;
                break;
            }
        }

        let summary = self.summary(end);
        info!(
            reviewed = summary.stats.reviewed,
            archived = summary.stats.archived,
            deleted = summary.stats.deleted,
            responded = summary.stats.responded,
            inbox_remaining = summary.inbox_remaining,
            "Session complete"
        );
        display.show_summary(&summary);
        Ok(summary)
    }

    /// Presents one message, applies the chosen action, and counts it as
    /// reviewed.
    ///
    /// An action that cannot be applied is reported as
    /// [`Outcome::Aborted`] and changes nothing; the message still counts as
    /// reviewed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MessageNotFound`] if `id` is not in the store, or a
    /// non-recoverable error from a collaborator. In the latter case the
    /// message is not counted.
    pub async fn process(
        &mut self,
        id: &MessageId,
        position: usize,
        total: usize,
        decisions: &mut dyn DecisionSource,
        display: &mut dyn DisplaySink,
    ) -> Result<Outcome> {
        let message = self
            .store
            .get(id)
            .cloned()
            .ok_or_else(|| Error::MessageNotFound(id.clone()))?;
        self.store.mark_read(id)?;

        let now = Utc::now();
        let suggestion = *self.classifier.suggest(&message, now);
        debug!(%id, %suggestion, "Presenting message");

        let presentation = Presentation {
            position,
            total,
            message: &message,
            suggestion: &suggestion,
            now,
        };
        display.show_message(&presentation);
        let action = decisions.choose_action(&presentation)?;
        debug!(%id, action = action.label(), "Action chosen");

        let outcome = match self.apply(action, &message, decisions, display).await {
            Ok(outcome) => outcome,
            Err(err) if err.is_recoverable() => {
                warn!(%id, error = %err, "Action aborted");
                Outcome::Aborted(err.to_string())
            }
            Err(err) => return Err(err),
        };

        self.stats.reviewed += 1;
        display.show_outcome(&outcome);
        Ok(outcome)
    }

    /// Current summary.
    #[must_use]
    pub fn summary(&self, end: SessionEnd) -> SessionSummary {
        SessionSummary {
            stats: self.stats,
            inbox_remaining: self.store.size_of(Folder::Inbox),
            end,
        }
    }

    async fn apply(
        &mut self,
        action: Action,
        message: &Message,
        decisions: &mut dyn DecisionSource,
        display: &mut dyn DisplaySink,
    ) -> Result<Outcome> {
        match action {
            Action::Archive => {
                self.require_in_inbox(&message.id)?;
                self.archive(&message.id).await?;
                Ok(Outcome::Archived)
            }
            Action::Delete => {
                self.require_in_inbox(&message.id)?;
                if !decisions.confirm(&Confirmation::Delete)? {
                    return Ok(Outcome::DeleteDeclined);
                }
                self.store
                    .move_message(&message.id, Folder::Inbox, Folder::Trash)?;
                self.stats.deleted += 1;
                self.settle().await;
                Ok(Outcome::Deleted)
            }
            Action::Reply => self.reply(message, decisions, display).await,
            Action::Skip => Ok(Outcome::Skipped),
            Action::ArchiveAllOlder => self.archive_older(message, decisions).await,
        }
    }

    async fn reply(
        &mut self,
        message: &Message,
        decisions: &mut dyn DecisionSource,
        display: &mut dyn DisplaySink,
    ) -> Result<Outcome> {
        self.require_in_inbox(&message.id)?;

        let body = decisions.compose_reply(message)?;
        let mut draft = Draft::reply_to(message, body)?;
        display.show_draft(&draft);

        let sent = draft::send(&mut draft, decisions);
        let copy = match sent {
            Ok(true) => Some(draft.to_sent_message(&self.from_address)?),
            _ => None,
        };
        self.drafts.push(draft);

        let Some(copy) = copy else {
            return sent.map(|_| Outcome::ReplyKeptAsDraft);
        };
        self.store.insert(copy, Folder::Sent)?;
        self.stats.responded += 1;
        self.archive(&message.id).await?;
        Ok(Outcome::RepliedAndArchived)
    }

    async fn archive_older(
        &mut self,
        message: &Message,
        decisions: &mut dyn DecisionSource,
    ) -> Result<Outcome> {
        let older: Vec<MessageId> = self
            .store
            .messages_in(Folder::Inbox)
            .into_iter()
            .filter(|m| m.received_at < message.received_at && m.id != message.id)
            .map(|m| m.id.clone())
            .collect();

        let found = older.len();
        if found == 0 {
            debug!(id = %message.id, "No older emails found");
            return Ok(Outcome::ArchivedOlder { found, archived: 0 });
        }
        if !decisions.confirm(&Confirmation::ArchiveOlder { count: found })? {
            return Ok(Outcome::ArchivedOlder { found, archived: 0 });
        }

        for id in &older {
            self.archive(id).await?;
        }
        info!(archived = found, "Archived older emails");
        Ok(Outcome::ArchivedOlder {
            found,
            archived: found,
        })
    }

    fn require_in_inbox(&self, id: &MessageId) -> Result<()> {
        match self.store.folder_of(id) {
            Some(Folder::Inbox) => Ok(()),
            Some(folder) => Err(Error::invalid_state(format!(
                "message {id} is in {folder}, not inbox"
            ))),
            None => Err(Error::MessageNotFound(id.clone())),
        }
    }

    async fn archive(&mut self, id: &MessageId) -> Result<()> {
        self.store.move_message(id, Folder::Inbox, Folder::Archive)?;
        self.stats.archived += 1;
        self.settle().await;
        Ok(())
    }

    /// Cosmetic pause after a folder change.
    async fn settle(&self) {
        if !self.pause.is_zero() {
            tokio::time::sleep(self.pause).await;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::testing::{RecordingDisplay, ScriptedDecisions};
    use chrono::TimeDelta;

    fn message(id: &str, days_ago: i64) -> Message {
        Message::new(
            MessageId::new(id),
            format!("{id}@example.com"),
            format!("About {id}"),
            Utc::now() - TimeDelta::days(days_ago),
            "body",
        )
    }

    fn session_with(messages: Vec<Message>) -> TriageSession {
        let mut session = TriageSession::new(&Settings::default());
        session.import(messages).unwrap();
        session
    }

    #[tokio::test(start_paused = true)]
    async fn test_archive_moves_and_counts() {
        let mut session = session_with(vec![message("a", 1)]);
        let a = MessageId::new("a");
        let mut decisions = ScriptedDecisions::new().with_actions([Action::Archive]);
        let mut display = RecordingDisplay::new();

        let outcome = session
            .process(&a, 1, 1, &mut decisions, &mut display)
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::Archived);
        assert!(session.store().contains(Folder::Archive, &a));
        assert!(session.store().get(&a).unwrap().is_read);
        assert_eq!(session.stats().archived, 1);
        assert_eq!(session.stats().reviewed, 1);
        assert_eq!(display.outcomes, vec![Outcome::Archived]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_skip_twice_only_counts_reviews() {
        let mut session = session_with(vec![message("a", 1)]);
        let a = MessageId::new("a");
        let mut decisions = ScriptedDecisions::new()
            .with_actions([Action::Skip, Action::Skip]);
        let mut display = RecordingDisplay::new();

        for _ in 0..2 {
            session
                .process(&a, 1, 1, &mut decisions, &mut display)
                .await
                .unwrap();
        }

        assert!(session.store().contains(Folder::Inbox, &a));
        assert_eq!(
            session.stats(),
            ProcessingStats {
                reviewed: 2,
                ..ProcessingStats::default()
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_delete_requires_confirmation() {
        let mut session = session_with(vec![message("a", 1)]);
        let a = MessageId::new("a");
        let mut decisions = ScriptedDecisions::new()
            .with_actions([Action::Delete, Action::Delete])
            .with_answers([false, true]);
        let mut display = RecordingDisplay::new();

        let declined = session
            .process(&a, 1, 1, &mut decisions, &mut display)
            .await
            .unwrap();
        assert_eq!(declined, Outcome::DeleteDeclined);
        assert!(session.store().contains(Folder::Inbox, &a));
        assert_eq!(session.stats().deleted, 0);

        let deleted = session
            .process(&a, 1, 1, &mut decisions, &mut display)
            .await
            .unwrap();
        assert_eq!(deleted, Outcome::Deleted);
        assert!(session.store().contains(Folder::Trash, &a));
        assert_eq!(session.stats().deleted, 1);
        assert_eq!(decisions.asked, vec![Confirmation::Delete, Confirmation::Delete]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_archiving_twice_aborts_second_action() {
        let mut session = session_with(vec![message("a", 1)]);
        let a = MessageId::new("a");
        let mut decisions = ScriptedDecisions::new()
            .with_actions([Action::Archive, Action::Archive]);
        let mut display = RecordingDisplay::new();

        session
            .process(&a, 1, 1, &mut decisions, &mut display)
            .await
            .unwrap();
        let outcome = session
            .process(&a, 1, 1, &mut decisions, &mut display)
            .await
            .unwrap();

        assert!(matches!(outcome, Outcome::Aborted(_)));
        assert_eq!(session.stats().archived, 1);
        assert_eq!(session.stats().reviewed, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_sent_files_copy_and_archives() {
        let mut session = session_with(vec![message("a", 1)]);
        let a = MessageId::new("a");
        let mut decisions = ScriptedDecisions::new()
            .with_actions([Action::Reply])
            .with_replies(["Thanks!"])
            .with_answers([true]);
        let mut display = RecordingDisplay::new();

        let outcome = session
            .process(&a, 1, 1, &mut decisions, &mut display)
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::RepliedAndArchived);
        assert_eq!(session.stats().responded, 1);
        assert_eq!(session.stats().archived, 1);
        assert!(session.store().contains(Folder::Archive, &a));

        let sent = session.store().messages_in(Folder::Sent);
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "Re: About a");
        assert_eq!(sent[0].sender, "me@firefly.local");

        assert_eq!(display.drafts.len(), 1);
        assert_eq!(display.drafts[0].body, "Thanks!");
        assert!(session.drafts()[0].is_sent());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_not_sent_keeps_draft() {
        let mut session = session_with(vec![message("a", 1)]);
        let a = MessageId::new("a");
        let mut decisions = ScriptedDecisions::new()
            .with_actions([Action::Reply])
            .with_replies(["Maybe later"])
            .with_answers([false]);
        let mut display = RecordingDisplay::new();

        let outcome = session
            .process(&a, 1, 1, &mut decisions, &mut display)
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::ReplyKeptAsDraft);
        assert!(session.store().contains(Folder::Inbox, &a));
        assert_eq!(session.store().size_of(Folder::Sent), 0);
        assert_eq!(session.stats().responded, 0);
        assert_eq!(session.stats().archived, 0);
        assert!(!session.drafts()[0].is_sent());
    }

    #[tokio::test(start_paused = true)]
    async fn test_archive_all_older_leaves_current_message() {
        let mut session = session_with(vec![
            message("old", 9),
            message("older", 12),
            message("new", 1),
        ]);
        let current = MessageId::new("new");
        let mut decisions = ScriptedDecisions::new()
            .with_actions([Action::ArchiveAllOlder])
            .with_answers([true]);
        let mut display = RecordingDisplay::new();

        let outcome = session
            .process(&current, 3, 3, &mut decisions, &mut display)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            Outcome::ArchivedOlder {
                found: 2,
                archived: 2
            }
        );
        assert!(session.store().contains(Folder::Inbox, &current));
        assert_eq!(session.store().size_of(Folder::Archive), 2);
        assert_eq!(session.stats().archived, 2);
        assert_eq!(session.stats().reviewed, 1);
        assert_eq!(decisions.asked, vec![Confirmation::ArchiveOlder { count: 2 }]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_archive_all_older_declined() {
        let mut session = session_with(vec![message("old", 9), message("new", 1)]);
        let mut decisions = ScriptedDecisions::new()
            .with_actions([Action::ArchiveAllOlder])
            .with_answers([false]);
        let mut display = RecordingDisplay::new();

        let outcome = session
            .process(&MessageId::new("new"), 2, 2, &mut decisions, &mut display)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            Outcome::ArchivedOlder {
                found: 1,
                archived: 0
            }
        );
        assert_eq!(session.store().size_of(Folder::Inbox), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_interrupt_leaves_last_applied_state() {
        let mut session = session_with(vec![message("a", 1)]);
        let a = MessageId::new("a");
        let mut decisions = ScriptedDecisions::new()
            .with_actions([Action::Delete])
            .interrupt_on_confirm();
        let mut display = RecordingDisplay::new();

        let err = session
            .process(&a, 1, 1, &mut decisions, &mut display)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Interrupted));
        assert!(session.store().contains(Folder::Inbox, &a));
        assert_eq!(session.stats(), ProcessingStats::default());
        assert!(display.outcomes.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_process_unknown_message() {
        let mut session = session_with(vec![]);
        let mut decisions = ScriptedDecisions::new().with_actions([Action::Skip]);
        let mut display = RecordingDisplay::new();

        let err = session
            .process(&MessageId::new("ghost"), 1, 1, &mut decisions, &mut display)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MessageNotFound(_)));
        assert_eq!(session.stats().reviewed, 0);
    }

    #[test]
    fn test_import_rejects_duplicates_atomically() {
        let mut session = TriageSession::new(&Settings::default());
        let err = session
            .import(vec![message("a", 1), message("b", 2), message("a", 3)])
            .unwrap_err();

        assert!(matches!(err, Error::DuplicateMessage(_)));
        assert!(session.store().is_empty());
    }
}
