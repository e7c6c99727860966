//! Message sources.

use chrono::{DateTime, Duration, Utc};

use super::model::{Message, MessageId};

/// Supplies the initial working queue for a triage session.
pub trait MessageSource {
    /// Loads the messages to triage, with ages computed relative to `now`.
    fn load(&self, now: DateTime<Utc>) -> Vec<Message>;
}

/// Literal seed data for one demo message.
struct Seed {
    sender: &'static str,
    subject: &'static str,
    days_ago: i64,
    body: &'static str,
}

const DEMO_SEEDS: [Seed; 5] = [
    Seed {
        sender: "newsletter@techcrunch.com",
        subject: "This Week in AI: Latest breakthroughs",
        days_ago: 14,
        body: "Weekly roundup of AI news and developments...",
    },
    Seed {
        sender: "no-reply@github.com",
        subject: "Your repository has a new star ⭐",
        days_ago: 2,
        body: "quantum-garden received a star from user...",
    },
    Seed {
        sender: "team@openai.com",
        subject: "Important: API usage update",
        days_ago: 0,
        body: "We're updating our API pricing model...",
    },
    Seed {
        sender: "support@aws.com",
        subject: "Your AWS bill is ready",
        days_ago: 5,
        body: "Your monthly bill of $47.32 is available...",
    },
    Seed {
        sender: "phil.shackleton@apu.edu",
        subject: "Re: Earwig progress update",
        days_ago: 1,
        body: "Hey Mychal, great progress on the MIDI integration!",
    },
];

/// The fixed set of five synthetic emails used by the demo.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoSource;

impl MessageSource for DemoSource {
    fn load(&self, now: DateTime<Utc>) -> Vec<Message> {
        DEMO_SEEDS
            .iter()
            .enumerate()
            .map(|(idx, seed)| {
                Message::new(
                    MessageId::new(format!("email_{idx}")),
                    seed.sender,
                    seed.subject,
                    now - Duration::days(seed.days_ago),
                    seed.body,
                )
            })
            .collect()
    }
}
