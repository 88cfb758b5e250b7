use serde::{Deserialize, Serialize};

use super::EntryList;
use crate::error::ValidationError;

/// How many retired lists are retained before the oldest is evicted.
pub const HISTORY_CAPACITY: usize = 3;

/// A bounded FIFO of retired entry lists.
///
/// Backed by a fixed ring with head/size bookkeeping; the ring mechanics
/// stay private. Index 0 is always the oldest retained list. Serde
/// round-trips through a plain oldest-first sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<EntryList>", into = "Vec<EntryList>")]
pub struct HistoryQueue {
    slots: [Option<EntryList>; HISTORY_CAPACITY],
    head: usize,
    size: usize,
}

impl HistoryQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Retire a list. Once the queue holds [`HISTORY_CAPACITY`] lists the
    /// oldest one is discarded to make room.
    pub fn push(&mut self, list: EntryList) {
        let tail = (self.head + self.size) % HISTORY_CAPACITY;
        if self.size == HISTORY_CAPACITY {
            self.head = (self.head + 1) % HISTORY_CAPACITY;
        } else {
            self.size += 1;
        }
        self.slots[tail] = Some(list);
    }

    /// `index` 0 is the oldest retained list.
    pub fn get(&self, index: usize) -> Result<&EntryList, ValidationError> {
        let out_of_bounds = ValidationError::OutOfBounds {
            collection: "HistoryQueue",
            index,
            len: self.size,
        };
        if index >= self.size {
            return Err(out_of_bounds);
        }
        self.slots[(self.head + index) % HISTORY_CAPACITY]
            .as_ref()
            .ok_or(out_of_bounds)
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Oldest-first iteration.
    pub fn iter(&self) -> impl Iterator<Item = &EntryList> {
        (0..self.size).filter_map(move |i| self.slots[(self.head + i) % HISTORY_CAPACITY].as_ref())
    }
}

// Logical oldest-first equality, independent of ring layout.
impl PartialEq for HistoryQueue {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl From<Vec<EntryList>> for HistoryQueue {
    fn from(lists: Vec<EntryList>) -> Self {
        let mut queue = Self::new();
        for list in lists {
            queue.push(list);
        }
        queue
    }
}

impl From<HistoryQueue> for Vec<EntryList> {
    fn from(queue: HistoryQueue) -> Self {
        queue.iter().cloned().collect()
    }
}
