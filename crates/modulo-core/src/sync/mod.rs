//! Day-boundary synchronization.
//!
//! Two call sites rotate entry lists, and they stay distinct on purpose:
//! the lazy catch-up run on every command ([`check_sync`], n steps for n
//! missed boundaries) and the explicit early-wakeup override
//! ([`confirm_wakeup`], exactly one forced step). Collapsing them into a
//! shared rotation primitive would silently weaken the forced-single-step
//! guarantee of the wakeup flow.

mod engine;
mod wakeup;

#[cfg(test)]
mod engine_tests;
#[cfg(test)]
mod wakeup_tests;

pub use engine::{check_sync, sync_status, SyncStatus, SECONDS_PER_DAY};
pub use wakeup::{confirm_wakeup, WakeupOutcome, EARLY_CONFIRM_WINDOW_MIN};
