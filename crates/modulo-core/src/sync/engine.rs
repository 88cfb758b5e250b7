//! The sync engine.
//!
//! State is synchronized lazily: each invocation samples `now` once and
//! compares it against the day pointer. Because the day pointer is always
//! aligned to `wakeup_latest`, every full 86400-second increment since it
//! corresponds to exactly one crossing of the daily boundary.
//!
//! ```text
//! InSync ──(boundary crossed)──> Behind(1) ──> rotate, advance 1
//!                                Behind(n>1) ─> flush both lists, advance n
//! ```
//!
//! `check_sync` is total: a backward clock jump yields `n <= 0` and is a
//! no-op rather than an error, and calling it twice with the same `now`
//! leaves the state untouched the second time.

use chrono::{DateTime, Utc};

use crate::clock;
use crate::mailbox::EntryList;
use crate::state::ModuloState;

pub const SECONDS_PER_DAY: i64 = 86_400;

/// Where the state sits relative to the daily boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    InSync,
    /// Number of `wakeup_latest` boundaries crossed since the day pointer.
    Behind(u32),
}

/// Report how many boundaries have elapsed without mutating anything.
pub fn sync_status(state: &ModuloState, now: DateTime<Utc>) -> SyncStatus {
    match days_behind(state, now) {
        days if days <= 0 => SyncStatus::InSync,
        days => SyncStatus::Behind(days as u32),
    }
}

fn days_behind(state: &ModuloState, now: DateTime<Utc>) -> i64 {
    clock::offset_seconds(now, state.day_ptr()).div_euclid(SECONDS_PER_DAY)
}

/// Catch up on any day boundaries crossed since the last sync.
///
/// Returns `true` when the entry lists rotated (the caller should
/// persist). A single missed boundary promotes tomorrow's list into
/// today; a multi-day gap means neither list was seen within a live
/// window, so both retire to history (older first) and fresh lists start
/// the new day. The day pointer advances by exactly the number of
/// boundaries counted, staying aligned to `wakeup_latest`.
pub fn check_sync(state: &mut ModuloState, now: DateTime<Utc>) -> bool {
    let days = days_behind(state, now);
    if days <= 0 {
        return false;
    }
    tracing::debug!(days, "rotating entry lists");
    if days == 1 {
        state.tomorrow.set_recv_date(now);
        let promoted = std::mem::replace(&mut state.tomorrow, EntryList::new());
        let retired = std::mem::replace(&mut state.today, promoted);
        if !retired.is_empty() {
            state.history.push(retired);
        }
    } else {
        let stale_today = std::mem::replace(&mut state.today, EntryList::new());
        let stale_tomorrow = std::mem::replace(&mut state.tomorrow, EntryList::new());
        if !stale_today.is_empty() {
            state.history.push(stale_today);
        }
        if !stale_tomorrow.is_empty() {
            state.history.push(stale_tomorrow);
        }
    }
    state.set_day_ptr(clock::occurrence_after(
        state.wakeup_latest(),
        state.day_ptr(),
        days,
    ));
    true
}
