//! Inbox zero triage.
//!
//! A [`TriageSession`] walks the inbox oldest first. For each message it:
//! 1. asks the [`Classifier`](crate::classify::Classifier) for a suggestion,
//! 2. shows message and suggestion through a [`DisplaySink`],
//! 3. gets one [`Action`] from a [`DecisionSource`],
//! 4. applies it to the [`FolderStore`](crate::store::FolderStore) and counts
//!    the message as reviewed.
//!
//! Deletes, sends and bulk archives each ask for their own confirmation, and
//! after every message but the last the decision source may stop the session.
//!
//! # Example
//!
//! ```ignore
//! use firefly_core::{DemoSource, MessageSource, Settings, TriageSession};
//!
//! let mut session = TriageSession::new(&Settings::default());
//! let summary = session
//!     .run(DemoSource.load(Utc::now()), &mut decisions, &mut display)
//!     .await?;
//!
//! if summary.inbox_zero() {
//!     println!("Inbox Zero achieved!");
//! }
//! ```

mod collaborator;
mod model;
mod session;

pub use collaborator::{DecisionSource, DisplaySink};
pub use model::{
    Action, Confirmation, Outcome, Presentation, ProcessingStats, SessionEnd, SessionSummary,
};
pub use session::TriageSession;
