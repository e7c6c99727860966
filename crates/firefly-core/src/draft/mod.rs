//! Drafts and the send gate.
//!
//! Every outgoing message starts life as a [`Draft`]. The only way to move a
//! draft to [`DraftStatus::Sent`] is [`send`], which asks the decision source
//! for its own explicit confirmation. Nothing is delivered anywhere; a sent
//! draft is filed into the sent folder by the caller.

mod gate;
mod model;

pub use gate::send;
pub use model::{Draft, DraftId, DraftStatus, MessageKind};
