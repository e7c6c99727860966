//! Interfaces to the human (or policy) driving a session.
//!
//! Both traits are synchronous: each call is a suspension point of the
//! session, returning only once the collaborator has answered.

use super::model::{Action, Confirmation, Outcome, Presentation, SessionSummary};
use crate::Result;
use crate::draft::Draft;
use crate::message::Message;

/// Makes the decisions a session needs.
///
/// Implementations return [`Error::Interrupted`](crate::Error::Interrupted)
/// when the decision maker goes away; the session stops immediately and
/// leaves all state as it was after the last applied action.
pub trait DecisionSource {
    /// Picks one of [`Action::ALL`] for the presented message. The menu
    /// default is [`Action::default`].
    ///
    /// # Errors
    ///
    /// Returns an error if no decision can be obtained.
    fn choose_action(&mut self, presentation: &Presentation<'_>) -> Result<Action>;

    /// Answers a yes/no question. See [`Confirmation::default_answer`].
    ///
    /// # Errors
    ///
    /// Returns an error if no answer can be obtained.
    fn confirm(&mut self, confirmation: &Confirmation) -> Result<bool>;

    /// Supplies the body of a reply to `original`.
    ///
    /// # Errors
    ///
    /// Returns an error if no body can be obtained.
    fn compose_reply(&mut self, original: &Message) -> Result<String>;
}

/// Renders session state. Must have rendered before the next decision is
/// requested.
pub trait DisplaySink {
    /// Shows a message with its suggestion and the action menu.
    fn show_message(&mut self, presentation: &Presentation<'_>);

    /// Shows a freshly composed draft for review.
    fn show_draft(&mut self, draft: &Draft);

    /// Reports what an action did.
    fn show_outcome(&mut self, outcome: &Outcome);

    /// Shows the end-of-session report.
    fn show_summary(&mut self, summary: &SessionSummary);
}
