//! Folder store for the messages of one session.

use std::collections::HashMap;

use tracing::{debug, info};

use super::model::Folder;
use crate::message::{Message, MessageId};
use crate::{Error, Result};

/// A message together with the folder it is filed in.
#[derive(Debug, Clone)]
struct Entry {
    message: Message,
    folder: Folder,
    /// Position within the folder; assigned on every insert or move.
    seq: u64,
}

/// Arena of messages tagged with their folder.
#[derive(Debug, Default)]
pub struct FolderStore {
    entries: HashMap<MessageId, Entry>,
    next_seq: u64,
}

impl FolderStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn next_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    fn entry_mut(&mut self, id: &MessageId) -> Result<&mut Entry> {
        self.entries
            .get_mut(id)
            .ok_or_else(|| Error::MessageNotFound(id.clone()))
    }

    /// Files a new message at the end of `folder`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateMessage`] if the identifier is already in the
    /// store, in any folder.
    pub fn insert(&mut self, message: Message, folder: Folder) -> Result<()> {
        if self.entries.contains_key(&message.id) {
            return Err(Error::DuplicateMessage(message.id));
        }

        let seq = self.next_seq();
        debug!(id = %message.id, %folder, "Filing message");
        self.entries.insert(
            message.id.clone(),
            Entry {
                message,
                folder,
                seq,
            },
        );
        Ok(())
    }

    /// Moves a message from `from` to the end of `to`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MessageNotFound`] if the message is not in the store,
    /// or [`Error::InvalidState`] if it is filed somewhere other than `from`.
    pub fn move_message(&mut self, id: &MessageId, from: Folder, to: Folder) -> Result<()> {
        let seq = self.next_seq();
        let entry = self.entry_mut(id)?;
        if entry.folder != from {
            return Err(Error::invalid_state(format!(
                "message {id} is in {}, not {from}",
                entry.folder
            )));
        }

        entry.folder = to;
        entry.seq = seq;
        info!(%id, %from, %to, "Moved message");
        Ok(())
    }

    /// Returns true if the message is filed in `folder`.
    #[must_use]
    pub fn contains(&self, folder: Folder, id: &MessageId) -> bool {
        self.entries.get(id).is_some_and(|e| e.folder == folder)
    }

    /// Number of messages filed in `folder`.
    #[must_use]
    pub fn size_of(&self, folder: Folder) -> usize {
        self.entries.values().filter(|e| e.folder == folder).count()
    }

    /// The folder a message is filed in.
    #[must_use]
    pub fn folder_of(&self, id: &MessageId) -> Option<Folder> {
        self.entries.get(id).map(|e| e.folder)
    }

    /// Look up a message by identifier.
    #[must_use]
    pub fn get(&self, id: &MessageId) -> Option<&Message> {
        self.entries.get(id).map(|e| &e.message)
    }

    /// Messages in `folder`, in the order they were filed there.
    #[must_use]
    pub fn messages_in(&self, folder: Folder) -> Vec<&Message> {
        let mut entries: Vec<&Entry> = self
            .entries
            .values()
            .filter(|e| e.folder == folder)
            .collect();
        entries.sort_by_key(|e| e.seq);
        entries.into_iter().map(|e| &e.message).collect()
    }

    /// Total number of messages across all folders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Marks a message as read.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MessageNotFound`] if the message is not in the store.
    pub fn mark_read(&mut self, id: &MessageId) -> Result<()> {
        self.entry_mut(id)?.message.is_read = true;
        Ok(())
    }

    /// Adds a label. Returns false if the message already had it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MessageNotFound`] if the message is not in the store.
    pub fn add_label(&mut self, id: &MessageId, label: &str) -> Result<bool> {
        Ok(self.entry_mut(id)?.message.labels.insert(label.to_string()))
    }

    /// Removes a label. Returns false if the message did not have it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MessageNotFound`] if the message is not in the store.
    pub fn remove_label(&mut self, id: &MessageId, label: &str) -> Result<bool> {
        Ok(self.entry_mut(id)?.message.labels.remove(label))
    }

    /// Permanently destroys a message that is in the trash.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MessageNotFound`] if the message is not in the store,
    /// or [`Error::InvalidState`] if it is not in the trash.
    pub fn purge(&mut self, id: &MessageId) -> Result<Message> {
        match self.folder_of(id) {
            None => Err(Error::MessageNotFound(id.clone())),
            Some(Folder::Trash) => {
                info!(%id, "Purged message");
                self.entries
                    .remove(id)
                    .map(|e| e.message)
                    .ok_or_else(|| Error::MessageNotFound(id.clone()))
            }
            Some(folder) => Err(Error::invalid_state(format!(
                "message {id} is in {folder}; only trash can be purged"
            ))),
        }
    }

    /// Permanently destroys everything in the trash. Returns the number purged.
    pub fn empty_trash(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, e| e.folder != Folder::Trash);
        let purged = before - self.entries.len();
        info!(purged, "Emptied trash");
        purged
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use proptest::prelude::*;

    fn message(id: &str) -> Message {
        Message::new(MessageId::new(id), "a@example.com", "Subject", Utc::now(), "")
    }

    fn store_with(ids: &[&str]) -> FolderStore {
        let mut store = FolderStore::new();
        for id in ids {
            store.insert(message(id), Folder::Inbox).unwrap();
        }
        store
    }

    #[test]
    fn test_insert_rejects_duplicates() {
        let mut store = store_with(&["a"]);
        store
            .move_message(&MessageId::new("a"), Folder::Inbox, Folder::Archive)
            .unwrap();

        let err = store.insert(message("a"), Folder::Inbox).unwrap_err();
        assert!(matches!(err, Error::DuplicateMessage(_)));
        assert_eq!(store.len(), 1);
        assert_eq!(store.folder_of(&MessageId::new("a")), Some(Folder::Archive));
    }

    #[test]
    fn test_move_between_folders() {
        let mut store = store_with(&["a", "b"]);
        let a = MessageId::new("a");

        store.move_message(&a, Folder::Inbox, Folder::Archive).unwrap();

        assert!(!store.contains(Folder::Inbox, &a));
        assert!(store.contains(Folder::Archive, &a));
        assert_eq!(store.size_of(Folder::Inbox), 1);
        assert_eq!(store.size_of(Folder::Archive), 1);
    }

    #[test]
    fn test_double_archive_is_invalid_state() {
        let mut store = store_with(&["a"]);
        let a = MessageId::new("a");

        store.move_message(&a, Folder::Inbox, Folder::Archive).unwrap();
        let err = store
            .move_message(&a, Folder::Inbox, Folder::Archive)
            .unwrap_err();

        assert!(matches!(err, Error::InvalidState(_)));
        assert_eq!(store.folder_of(&a), Some(Folder::Archive));
    }

    #[test]
    fn test_move_unknown_message() {
        let mut store = store_with(&[]);
        let err = store
            .move_message(&MessageId::new("ghost"), Folder::Inbox, Folder::Trash)
            .unwrap_err();
        assert!(matches!(err, Error::MessageNotFound(_)));
    }

    #[test]
    fn test_messages_in_keeps_filing_order() {
        let mut store = store_with(&["a", "b", "c"]);
        for id in ["c", "a"] {
            store
                .move_message(&MessageId::new(id), Folder::Inbox, Folder::Archive)
                .unwrap();
        }

        let archived: Vec<&str> = store
            .messages_in(Folder::Archive)
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(archived, vec!["c", "a"]);

        let inbox: Vec<&str> = store
            .messages_in(Folder::Inbox)
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(inbox, vec!["b"]);
    }

    #[test]
    fn test_labels_and_read_flag() {
        let mut store = store_with(&["a"]);
        let a = MessageId::new("a");

        assert!(store.add_label(&a, "receipts").unwrap());
        assert!(!store.add_label(&a, "receipts").unwrap());
        store.mark_read(&a).unwrap();

        let msg = store.get(&a).unwrap();
        assert!(msg.is_read);
        assert!(msg.has_label("receipts"));

        assert!(store.remove_label(&a, "receipts").unwrap());
        assert!(!store.remove_label(&a, "receipts").unwrap());
        assert!(store.add_label(&MessageId::new("ghost"), "x").is_err());
    }

    #[test]
    fn test_purge_only_from_trash() {
        let mut store = store_with(&["a", "b"]);
        let a = MessageId::new("a");

        let err = store.purge(&a).unwrap_err();
        assert!(matches!(err, Error::InvalidState(_)));

        store.move_message(&a, Folder::Inbox, Folder::Trash).unwrap();
        let purged = store.purge(&a).unwrap();

        assert_eq!(purged.id, a);
        assert!(store.folder_of(&a).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_empty_trash() {
        let mut store = store_with(&["a", "b", "c"]);
        for id in ["a", "c"] {
            store
                .move_message(&MessageId::new(id), Folder::Inbox, Folder::Trash)
                .unwrap();
        }

        assert_eq!(store.empty_trash(), 2);
        assert_eq!(store.size_of(Folder::Trash), 0);
        assert_eq!(store.len(), 1);
    }

    fn folder_strategy() -> impl Strategy<Value = Folder> {
        prop_oneof![
            Just(Folder::Inbox),
            Just(Folder::Archive),
            Just(Folder::Trash),
            Just(Folder::Sent),
        ]
    }

    proptest! {
        #[test]
        fn prop_every_message_in_exactly_one_folder(
            moves in prop::collection::vec((0usize..6, folder_strategy(), folder_strategy()), 0..64)
        ) {
            let ids: Vec<String> = (0..6).map(|i| format!("email_{i}")).collect();
            let mut store = FolderStore::new();
            for id in &ids {
                store.insert(message(id), Folder::Inbox).unwrap();
            }

            for (idx, from, to) in moves {
                let id = MessageId::new(ids[idx].as_str());
                let before = store.folder_of(&id).unwrap();
                let result = store.move_message(&id, from, to);

                if before == from {
                    prop_assert!(result.is_ok());
                    prop_assert_eq!(store.folder_of(&id), Some(to));
                } else {
                    prop_assert!(result.is_err());
                    prop_assert_eq!(store.folder_of(&id), Some(before));
                }
            }

            let total: usize = Folder::ALL.iter().map(|f| store.size_of(*f)).sum();
            prop_assert_eq!(total, ids.len());
            for id in &ids {
                let id = MessageId::new(id.as_str());
                let homes = Folder::ALL.iter().filter(|f| store.contains(**f, &id)).count();
                prop_assert_eq!(homes, 1);
            }
        }
    }
}
