//! Entry mailboxes.
//!
//! An [`EntryList`] is an ordered mailbox of text entries with lifecycle
//! metadata; a [`HistoryQueue`] is a bounded retention buffer of retired
//! lists, oldest evicted first.

mod entry_list;
mod history;

pub use entry_list::EntryList;
pub use history::{HistoryQueue, HISTORY_CAPACITY};
