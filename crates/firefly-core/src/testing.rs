//! Scripted collaborators for driving sessions without a console.

use std::collections::VecDeque;

use crate::classify::Suggestion;
use crate::draft::Draft;
use crate::message::{Message, MessageId};
use crate::triage::{
    Action, Confirmation, DecisionSource, DisplaySink, Outcome, Presentation, SessionSummary,
};
use crate::{Error, Result};

/// Decision source that replays queued answers.
///
/// Running out of actions or replies is treated as an interrupt. Running out
/// of confirmation answers falls back to each question's default, unless
/// [`interrupt_on_confirm`](Self::interrupt_on_confirm) was set.
#[derive(Debug, Default)]
pub struct ScriptedDecisions {
    actions: VecDeque<Action>,
    answers: VecDeque<bool>,
    replies: VecDeque<String>,
    interrupt_on_confirm: bool,
    /// Every confirmation asked, in order.
    pub asked: Vec<Confirmation>,
    /// Every message an action was requested for, in order.
    pub presented: Vec<MessageId>,
}

impl ScriptedDecisions {
    /// Creates a source with nothing queued.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues action choices.
    #[must_use]
    pub fn with_actions(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.actions.extend(actions);
        self
    }

    /// Queues confirmation answers.
    #[must_use]
    pub fn with_answers(mut self, answers: impl IntoIterator<Item = bool>) -> Self {
        self.answers.extend(answers);
        self
    }

    /// Queues reply bodies.
    #[must_use]
    pub fn with_replies<S: Into<String>>(mut self, replies: impl IntoIterator<Item = S>) -> Self {
        self.replies.extend(replies.into_iter().map(Into::into));
        self
    }

    /// Interrupt instead of defaulting once the queued answers run out.
    #[must_use]
    pub const fn interrupt_on_confirm(mut self) -> Self {
        self.interrupt_on_confirm = true;
        self
    }
}

impl DecisionSource for ScriptedDecisions {
    fn choose_action(&mut self, presentation: &Presentation<'_>) -> Result<Action> {
        self.presented.push(presentation.message.id.clone());
        self.actions.pop_front().ok_or(Error::Interrupted)
    }

    fn confirm(&mut self, confirmation: &Confirmation) -> Result<bool> {
        self.asked.push(confirmation.clone());
        match self.answers.pop_front() {
            Some(answer) => Ok(answer),
            None if self.interrupt_on_confirm => Err(Error::Interrupted),
            None => Ok(confirmation.default_answer()),
        }
    }

    fn compose_reply(&mut self, _original: &Message) -> Result<String> {
        self.replies.pop_front().ok_or(Error::Interrupted)
    }
}

/// Display sink that records everything it is shown.
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    /// `(position, total, message id, suggestion)` for each presented message.
    pub presented: Vec<(usize, usize, MessageId, Suggestion)>,
    /// Drafts shown for review.
    pub drafts: Vec<Draft>,
    /// Outcomes, one per applied action.
    pub outcomes: Vec<Outcome>,
    /// Summaries shown.
    pub summaries: Vec<SessionSummary>,
}

impl RecordingDisplay {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplaySink for RecordingDisplay {
    fn show_message(&mut self, presentation: &Presentation<'_>) {
        self.presented.push((
            presentation.position,
            presentation.total,
            presentation.message.id.clone(),
            *presentation.suggestion,
        ));
    }

    fn show_draft(&mut self, draft: &Draft) {
        self.drafts.push(draft.clone());
    }

    fn show_outcome(&mut self, outcome: &Outcome) {
        self.outcomes.push(outcome.clone());
    }

    fn show_summary(&mut self, summary: &SessionSummary) {
        self.summaries.push(*summary);
    }
}
