use chrono::{DateTime, Utc};

use crate::clock;
use crate::mailbox::EntryList;
use crate::state::ModuloState;

/// Width of the window ahead of `wakeup_earliest` (minutes) in which an
/// early start is allowed after an explicit confirmation.
pub const EARLY_CONFIRM_WINDOW_MIN: i64 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WakeupOutcome {
    Confirmed,
    Rejected,
}

/// Decide whether a "start my day now" request is honored, and perform
/// exactly one rotation step when it is.
///
/// Relative to the next occurrence of `wakeup_earliest` after the day
/// pointer, `now` falls in one of three zones: at or past it, confirmed
/// without a prompt; within [`EARLY_CONFIRM_WINDOW_MIN`] minutes before
/// it, `user_confirms` decides; further out, rejected without a prompt.
///
/// A confirmation rotates exactly one step no matter how many boundaries
/// have naturally elapsed -- this is a user override of the lazy
/// boundary, not a substitute for [`super::check_sync`]. On rejection the
/// state is left untouched.
pub fn confirm_wakeup(
    state: &mut ModuloState,
    now: DateTime<Utc>,
    mut user_confirms: impl FnMut() -> bool,
) -> WakeupOutcome {
    let earliest = clock::next_occurrence(state.wakeup_earliest(), state.day_ptr());
    let minutes_until = clock::offset_seconds(earliest, now) / 60;
    let confirmed = if minutes_until <= 0 {
        true
    } else if minutes_until <= EARLY_CONFIRM_WINDOW_MIN {
        user_confirms()
    } else {
        false
    };
    if !confirmed {
        return WakeupOutcome::Rejected;
    }

    state.tomorrow.set_recv_date(now);
    let promoted = std::mem::replace(&mut state.tomorrow, EntryList::new());
    let retired = std::mem::replace(&mut state.today, promoted);
    if !retired.is_empty() {
        state.history.push(retired);
    }
    state.set_day_ptr(clock::occurrence_after(
        state.wakeup_latest(),
        state.day_ptr(),
        1,
    ));
    WakeupOutcome::Confirmed
}
