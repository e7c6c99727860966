//! Rule and suggestion types.

use chrono::{DateTime, Utc};

use crate::message::Message;

/// What the classifier recommends doing with a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Move it out of the inbox.
    Archive,
    /// Keep it around.
    Keep,
    /// Needs a human look.
    Review,
}

impl Verdict {
    /// Human-readable display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Archive => "Archive",
            Self::Keep => "Keep",
            Self::Review => "Review",
        }
    }
}

/// A verdict with the reason it was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    /// Recommended handling.
    pub verdict: Verdict,
    /// Short justification shown to the user.
    pub reason: &'static str,
}

impl Suggestion {
    /// Creates a new suggestion.
    #[must_use]
    pub const fn new(verdict: Verdict, reason: &'static str) -> Self {
        Self { verdict, reason }
    }
}

impl std::fmt::Display for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.verdict.display_name(), self.reason)
    }
}

/// Predicate over a message and the current time.
pub type Predicate = fn(&Message, DateTime<Utc>) -> bool;

/// A named predicate paired with the suggestion it produces.
#[derive(Clone)]
pub struct Rule {
    name: &'static str,
    predicate: Predicate,
    suggestion: Suggestion,
}

impl Rule {
    /// Creates a new rule.
    #[must_use]
    pub const fn new(name: &'static str, predicate: Predicate, suggestion: Suggestion) -> Self {
        Self {
            name,
            predicate,
            suggestion,
        }
    }

    /// Short identifier, used in logs and tests.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The suggestion produced when this rule matches.
    #[must_use]
    pub const fn suggestion(&self) -> &Suggestion {
        &self.suggestion
    }

    /// Returns true if the rule applies to `message` at `now`.
    #[must_use]
    pub fn matches(&self, message: &Message, now: DateTime<Utc>) -> bool {
        (self.predicate)(message, now)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("suggestion", &self.suggestion)
            .finish_non_exhaustive()
    }
}
