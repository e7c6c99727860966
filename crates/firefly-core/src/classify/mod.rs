//! Rule-based suggestions.
//!
//! The classifier is an ordered list of [`Rule`]s. Rules are tried in order
//! and the first whose predicate matches supplies the [`Suggestion`]; if none
//! match, the fallback is used. Order is the only tie-break: a newsletter that
//! is also old and mentions a bill is still reported as a newsletter.
//!
//! # Example
//!
//! ```ignore
//! use firefly_core::classify::Classifier;
//!
//! let classifier = Classifier::standard();
//! let suggestion = classifier.suggest(&message, Utc::now());
//! println!("AI Suggestion: {suggestion}");
//! ```

mod rule;

pub use rule::{Rule, Suggestion, Verdict};

use chrono::{DateTime, Utc};

use crate::message::Message;

/// Messages older than this many whole days are considered aged out.
pub const AGED_OUT_DAYS: i64 = 30;

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn is_newsletter(message: &Message, _now: DateTime<Utc>) -> bool {
    contains_ignore_case(&message.sender, "newsletter")
}

fn is_aged_out(message: &Message, now: DateTime<Utc>) -> bool {
    message.age_days(now) > AGED_OUT_DAYS
}

fn mentions_bill(message: &Message, _now: DateTime<Utc>) -> bool {
    contains_ignore_case(&message.subject, "bill")
}

fn flagged_important(message: &Message, _now: DateTime<Utc>) -> bool {
    contains_ignore_case(&message.subject, "important")
}

/// Ordered first-match-wins rule list.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<Rule>,
    fallback: Suggestion,
}

impl Classifier {
    /// The built-in rule list.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            rules: vec![
                Rule::new(
                    "newsletter",
                    is_newsletter,
                    Suggestion::new(Verdict::Archive, "This is a newsletter, older than 7 days"),
                ),
                Rule::new(
                    "aged-out",
                    is_aged_out,
                    Suggestion::new(Verdict::Archive, "Email is over 30 days old"),
                ),
                Rule::new(
                    "bill",
                    mentions_bill,
                    Suggestion::new(Verdict::Keep, "This is a bill/invoice"),
                ),
                Rule::new(
                    "important",
                    flagged_important,
                    Suggestion::new(Verdict::Review, "Marked as important"),
                ),
            ],
            fallback: Suggestion::new(Verdict::Archive, "Appears to be informational"),
        }
    }

    /// The rules, in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The first rule matching `message`, if any.
    #[must_use]
    pub fn matching_rule(&self, message: &Message, now: DateTime<Utc>) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.matches(message, now))
    }

    /// Suggests what to do with `message` as of `now`.
    #[must_use]
    pub fn suggest(&self, message: &Message, now: DateTime<Utc>) -> &Suggestion {
        self.matching_rule(message, now)
            .map_or(&self.fallback, Rule::suggestion)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::standard()
    }
}
