//! # Modulo Core Library
//!
//! This library provides the core business logic for Modulo, a single-user
//! journaling tool that carries short text entries from a "write for
//! tomorrow" list into a "read today" list once the user's daily wakeup
//! boundary elapses. All operations are available through the standalone
//! `modulo` CLI, which is a thin glue layer over this crate.
//!
//! ## Architecture
//!
//! - **Sync Engine**: A wall-clock-based state machine. There is no
//!   background timer -- each CLI invocation samples `now` once and calls
//!   [`check_sync`] to catch up on any day boundaries crossed since the
//!   state was last touched.
//! - **Mailbox**: Ordered entry lists with lifecycle metadata, plus a
//!   bounded history of retired lists.
//! - **Storage**: A single JSON document under the user's config directory.
//!
//! ## Key Components
//!
//! - [`ModuloState`]: The full persisted application state
//! - [`check_sync`] / [`confirm_wakeup`]: The two rotation call sites
//! - [`ClockTime`]: Minutes-since-midnight wall-clock conversions
//! - [`EntryList`] / [`HistoryQueue`]: The entry containers

pub mod clock;
pub mod error;
pub mod mailbox;
pub mod state;
pub mod storage;
pub mod sync;

pub use clock::ClockTime;
pub use error::{CoreError, StorageError, ValidationError};
pub use mailbox::{EntryList, HistoryQueue};
pub use state::ModuloState;
pub use sync::{check_sync, confirm_wakeup, sync_status, SyncStatus, WakeupOutcome};
