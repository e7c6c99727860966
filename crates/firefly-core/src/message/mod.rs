//! Messages under triage and the sources that supply them.
//!
//! A [`Message`] is created by a [`MessageSource`] at session start and is
//! afterwards owned by the [`FolderStore`](crate::store::FolderStore).

mod model;
mod source;

pub use model::{Message, MessageId};
pub use source::{DemoSource, MessageSource};
