//! The persisted application state.
//!
//! One value of [`ModuloState`] is loaded at the start of every CLI
//! invocation, mutated in memory by exactly one command, and written back
//! only when something changed. All time-dependent operations take `now`
//! as an explicit parameter; nothing in here reads the system clock.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::{self, ClockTime};
use crate::error::ValidationError;
use crate::mailbox::{EntryList, HistoryQueue};

pub const USERNAME_MAX_LEN: usize = 31;
pub const DELIMITER_MAX_LEN: usize = 15;
pub const ENTRY_MAX_LEN: usize = 1024;

const DEFAULT_WAKEUP_EARLIEST: ClockTime = ClockTime::from_hm(6, 0);
const DEFAULT_WAKEUP_LATEST: ClockTime = ClockTime::from_hm(9, 0);
const DEFAULT_DELIMITER: &str = "%";

/// The full application state.
///
/// `day_ptr` anchors the start of the current day and is always aligned
/// to the most recent occurrence of `wakeup_latest` at or before the last
/// successful sync; the sync engine is the only thing that moves it
/// forward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuloState {
    username: String,
    wakeup_earliest: ClockTime,
    wakeup_latest: ClockTime,
    entry_delimiter: String,
    day_ptr: DateTime<Utc>,
    pub(crate) today: EntryList,
    pub(crate) tomorrow: EntryList,
    pub(crate) history: HistoryQueue,
}

impl ModuloState {
    /// Default state for a fresh install: 6:00-9:00 wakeup window, `%`
    /// delimiter, day pointer anchored to the most recent 9:00.
    pub fn new(username: impl Into<String>, now: DateTime<Utc>) -> Result<Self, ValidationError> {
        let username = username.into();
        check_len("username", &username, USERNAME_MAX_LEN)?;
        Ok(Self {
            username,
            wakeup_earliest: DEFAULT_WAKEUP_EARLIEST,
            wakeup_latest: DEFAULT_WAKEUP_LATEST,
            entry_delimiter: DEFAULT_DELIMITER.to_string(),
            day_ptr: clock::most_recent_occurrence(DEFAULT_WAKEUP_LATEST, now),
            today: EntryList::new(),
            tomorrow: EntryList::new(),
            history: HistoryQueue::new(),
        })
    }

    // ── Preferences ──────────────────────────────────────────────────

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn wakeup_earliest(&self) -> ClockTime {
        self.wakeup_earliest
    }

    pub fn wakeup_latest(&self) -> ClockTime {
        self.wakeup_latest
    }

    pub fn entry_delimiter(&self) -> &str {
        &self.entry_delimiter
    }

    pub fn set_username(&mut self, username: impl Into<String>) -> Result<(), ValidationError> {
        let username = username.into();
        check_len("username", &username, USERNAME_MAX_LEN)?;
        self.username = username;
        Ok(())
    }

    pub fn set_wakeup_earliest(&mut self, wakeup: ClockTime) {
        self.wakeup_earliest = wakeup;
    }

    /// Update the daily boundary and re-anchor the day pointer to the most
    /// recent occurrence of the new boundary, keeping the alignment
    /// invariant. Callers are expected to have synced first.
    pub fn set_wakeup_latest(&mut self, wakeup: ClockTime, now: DateTime<Utc>) {
        self.wakeup_latest = wakeup;
        self.day_ptr = clock::most_recent_occurrence(wakeup, now);
    }

    pub fn set_entry_delimiter(
        &mut self,
        delimiter: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let delimiter = delimiter.into();
        if delimiter.is_empty() {
            return Err(ValidationError::Empty {
                field: "entry_delimiter",
            });
        }
        check_len("entry_delimiter", &delimiter, DELIMITER_MAX_LEN)?;
        self.entry_delimiter = delimiter;
        Ok(())
    }

    // ── Day pointer ──────────────────────────────────────────────────

    pub fn day_ptr(&self) -> DateTime<Utc> {
        self.day_ptr
    }

    pub(crate) fn set_day_ptr(&mut self, day_ptr: DateTime<Utc>) {
        self.day_ptr = day_ptr;
    }

    // ── Entry lists ──────────────────────────────────────────────────

    pub fn today(&self) -> &EntryList {
        &self.today
    }

    pub fn tomorrow(&self) -> &EntryList {
        &self.tomorrow
    }

    pub fn history(&self) -> &HistoryQueue {
        &self.history
    }

    /// Append an entry to tomorrow's list and stamp its send date.
    pub fn push_tomorrow(
        &mut self,
        entry: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<(), ValidationError> {
        let entry = entry.into();
        check_len("entry", &entry, ENTRY_MAX_LEN)?;
        self.tomorrow.push(entry);
        self.tomorrow.set_send_date(now);
        Ok(())
    }

    /// Remove the entry at `index` from tomorrow's list.
    pub fn remove_tomorrow(&mut self, index: usize) -> Result<String, ValidationError> {
        self.tomorrow.remove(index)
    }

    /// Latch the read receipt on today's list.
    pub fn mark_today_read(&mut self) {
        self.today.mark_read();
    }

    /// Field-level checks applied after decode, so a hand-edited document
    /// that violates the limits is treated like any other corrupt file.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_len("username", &self.username, USERNAME_MAX_LEN)?;
        if self.entry_delimiter.is_empty() {
            return Err(ValidationError::Empty {
                field: "entry_delimiter",
            });
        }
        check_len("entry_delimiter", &self.entry_delimiter, DELIMITER_MAX_LEN)?;
        Ok(())
    }
}

fn check_len(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.len() > max {
        return Err(ValidationError::TooLong {
            field,
            max,
            len: value.len(),
        });
    }
    Ok(())
}
