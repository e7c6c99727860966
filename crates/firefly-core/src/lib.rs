//! # firefly-core
//!
//! Core logic for the Firefly inbox zero agent.
//!
//! This crate provides:
//! - **Messages** - the emails under triage and the sources that supply them
//! - **Folder store** - inbox, archive, trash and sent, one folder per message
//! - **Suggestions** - a fixed, ordered list of first-match-wins rules
//! - **Drafts** - composed replies that only leave draft state through the
//!   send gate's explicit confirmation
//! - **Triage sessions** - the oldest-first review loop and its statistics
//!
//! All state is in memory and lasts for one session. Nothing is delivered
//! anywhere.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod classify;
pub mod draft;
mod error;
pub mod message;
mod settings;
pub mod store;
pub mod testing;
pub mod triage;

pub use classify::{Classifier, Suggestion, Verdict};
pub use draft::{Draft, DraftId, DraftStatus, MessageKind};
pub use error::{Error, Result};
pub use message::{DemoSource, Message, MessageId, MessageSource};
pub use settings::Settings;
pub use store::{Folder, FolderStore};
pub use triage::{
    Action, Confirmation, DecisionSource, DisplaySink, Outcome, Presentation, ProcessingStats,
    SessionEnd, SessionSummary, TriageSession,
};
