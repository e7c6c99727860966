//! In-memory folder store.
//!
//! Messages live in a single arena keyed by [`MessageId`](crate::message::MessageId);
//! each entry carries the [`Folder`] it is filed in. Moving a message rewrites
//! that tag in place, so a message can never be in two folders at once or
//! fall between them.

mod model;
mod repository;

pub use model::Folder;
pub use repository::FolderStore;
