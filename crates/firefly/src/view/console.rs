//! Console rendering of a triage session.

use std::io::{self, Write};

use firefly_core::{
    Action, Draft, DisplaySink, MessageKind, Outcome, Presentation, SessionSummary,
};
use tracing::warn;

use super::layout::{field_row, panel};

/// Renders session events as plain text on any writer.
pub struct ConsoleDisplay<W: Write> {
    out: W,
    preview_chars: usize,
}

impl<W: Write> ConsoleDisplay<W> {
    /// Creates a display writing to `out`, showing at most `preview_chars`
    /// characters of each body.
    pub const fn new(out: W, preview_chars: usize) -> Self {
        Self { out, preview_chars }
    }

    /// Gives back the writer.
    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Direct access to the writer, for banners.
    pub const fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    /// Announces the size of the queue.
    pub fn session_start(&mut self, total: usize) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "📧 Starting Inbox Zero Session")?;
        writeln!(self.out, "Found {total} emails to process")?;
        writeln!(self.out)
    }

    fn render_message(&mut self, p: &Presentation<'_>) -> io::Result<()> {
        let message = p.message;
        writeln!(self.out)?;
        writeln!(self.out, "Email {}/{}", p.position, p.total)?;
        field_row(&mut self.out, "From:", &message.sender)?;
        field_row(&mut self.out, "Subject:", &message.subject)?;
        let date = format!(
            "{} ({} days old)",
            message.received_at.format("%Y-%m-%d"),
            p.age_days()
        );
        field_row(&mut self.out, "Date:", &date)?;
        writeln!(self.out)?;
        writeln!(self.out, "{}", message.preview(self.preview_chars))?;
        writeln!(self.out)?;
        writeln!(self.out, "🤖 AI Suggestion: {}", p.suggestion)?;
        writeln!(self.out)?;
        for action in Action::ALL {
            writeln!(self.out, "{}. {}", action.key(), action.label())?;
        }
        self.out.flush()
    }

    fn render_draft(&mut self, draft: &Draft) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "📝 Draft Message")?;
        field_row(&mut self.out, "To:", &draft.recipient)?;
        if draft.kind == MessageKind::Email {
            field_row(
                &mut self.out,
                "Subject:",
                draft.subject.as_deref().unwrap_or_default(),
            )?;
        }
        field_row(&mut self.out, "Type:", &draft.kind.as_str().to_uppercase())?;
        field_row(
            &mut self.out,
            "Status:",
            &draft.status().as_str().to_uppercase(),
        )?;
        writeln!(self.out)?;
        writeln!(self.out, "Message:")?;
        let lines: Vec<&str> = draft.body.lines().collect();
        panel(&mut self.out, None, &lines)?;
        self.out.flush()
    }

    fn render_outcome(&mut self, outcome: &Outcome) -> io::Result<()> {
        match outcome {
            Outcome::Archived => writeln!(self.out, "✅ Archived")?,
            Outcome::Deleted => writeln!(self.out, "🗑️  Deleted")?,
            Outcome::DeleteDeclined => writeln!(self.out, "Delete cancelled")?,
            Outcome::RepliedAndArchived => {
                writeln!(self.out, "✅ Message sent!")?;
                writeln!(self.out, "✅ Archived")?;
            }
            Outcome::ReplyKeptAsDraft => writeln!(self.out, "📝 Message remains in draft mode")?,
            Outcome::Skipped => writeln!(self.out, "Skipped")?,
            Outcome::ArchivedOlder { found: 0, .. } => writeln!(self.out, "No older emails found")?,
            Outcome::ArchivedOlder { found, archived: 0 } => {
                writeln!(self.out, "Kept {found} older emails")?;
            }
            Outcome::ArchivedOlder { archived, .. } => {
                writeln!(self.out, "✅ Archived {archived} emails")?;
            }
            Outcome::Aborted(reason) => writeln!(self.out, "⚠️  Action not applied: {reason}")?,
        }
        self.out.flush()
    }

    fn render_summary(&mut self, summary: &SessionSummary) -> io::Result<()> {
        let stats = summary.stats;
        let rows = [
            ("Emails Reviewed", stats.reviewed.to_string()),
            ("Archived", stats.archived.to_string()),
            ("Deleted", stats.deleted.to_string()),
            ("Replied", stats.responded.to_string()),
            ("Remaining in Inbox", summary.inbox_remaining.to_string()),
        ];

        writeln!(self.out)?;
        writeln!(self.out, "✨ Inbox Zero Session Complete!")?;
        writeln!(self.out)?;
        writeln!(self.out, "Session Summary")?;
        writeln!(self.out, "{:<20} {:>6}", "Metric", "Count")?;
        for (metric, count) in rows {
            writeln!(self.out, "{metric:<20} {count:>6}")?;
        }
        writeln!(self.out)?;
        if summary.inbox_zero() {
            writeln!(self.out, "🎉 Inbox Zero achieved!")?;
        } else {
            writeln!(self.out, "📧 {} emails remaining", summary.inbox_remaining)?;
        }
        self.out.flush()
    }
}

impl<W: Write> DisplaySink for ConsoleDisplay<W> {
    fn show_message(&mut self, presentation: &Presentation<'_>) {
        if let Err(err) = self.render_message(presentation) {
            warn!(error = %err, "Failed to render message");
        }
    }

    fn show_draft(&mut self, draft: &Draft) {
        if let Err(err) = self.render_draft(draft) {
            warn!(error = %err, "Failed to render draft");
        }
    }

    fn show_outcome(&mut self, outcome: &Outcome) {
        if let Err(err) = self.render_outcome(outcome) {
            warn!(error = %err, "Failed to render outcome");
        }
    }

    fn show_summary(&mut self, summary: &SessionSummary) {
        if let Err(err) = self.render_summary(summary) {
            warn!(error = %err, "Failed to render summary");
        }
    }
}
