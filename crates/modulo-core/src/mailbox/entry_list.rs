use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// An ordered mailbox of text entries plus lifecycle metadata.
///
/// `send_date` is the last time the list was appended to while it was
/// being authored; `recv_date` is when it was delivered as a "today"
/// list. The read receipt only ever moves false -> true.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryList {
    #[serde(default)]
    send_date: Option<DateTime<Utc>>,
    #[serde(default)]
    recv_date: Option<DateTime<Utc>>,
    #[serde(default)]
    read_receipt: bool,
    #[serde(default)]
    entries: Vec<String>,
}

impl EntryList {
    /// An empty list with no timestamps and an unset read receipt.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, preserving insertion order. Duplicates are allowed.
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    pub fn get(&self, index: usize) -> Result<&str, ValidationError> {
        self.entries
            .get(index)
            .map(String::as_str)
            .ok_or(ValidationError::OutOfBounds {
                collection: "EntryList",
                index,
                len: self.entries.len(),
            })
    }

    /// Remove the entry at `index`; later entries shift down one position.
    pub fn remove(&mut self, index: usize) -> Result<String, ValidationError> {
        if index >= self.entries.len() {
            return Err(ValidationError::OutOfBounds {
                collection: "EntryList",
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn send_date(&self) -> Option<DateTime<Utc>> {
        self.send_date
    }

    pub fn recv_date(&self) -> Option<DateTime<Utc>> {
        self.recv_date
    }

    pub fn read_receipt(&self) -> bool {
        self.read_receipt
    }

    pub fn set_send_date(&mut self, at: DateTime<Utc>) {
        self.send_date = Some(at);
    }

    pub fn set_recv_date(&mut self, at: DateTime<Utc>) {
        self.recv_date = Some(at);
    }

    /// Latch the read receipt. There is no way back to unread.
    pub fn mark_read(&mut self) {
        self.read_receipt = true;
    }
}
