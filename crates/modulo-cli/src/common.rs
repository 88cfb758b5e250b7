//! Shared helpers for CLI commands.

use std::io::Write;

use chrono::{DateTime, Local, Utc};
use modulo_core::{storage, EntryList, ModuloState};

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Load state and catch up on any missed day boundaries.
///
/// Returns the state plus whether the catch-up rotated anything; commands
/// that mutate further can fold that into their own save, read-only
/// commands persist it themselves so the rotation is not recomputed on
/// every run.
pub fn load_synced(now: DateTime<Utc>) -> Result<(ModuloState, bool), Box<dyn std::error::Error>> {
    let Some(mut state) = storage::load()? else {
        return Err("no modulo state found; run `modulo init` first".into());
    };
    let rotated = modulo_core::check_sync(&mut state, now);
    Ok((state, rotated))
}

pub fn save(state: &ModuloState) -> CliResult {
    storage::save(state)?;
    Ok(())
}

pub fn print_entries(list: &EntryList) {
    for (i, entry) in list.iter().enumerate() {
        println!("{:>3}. {entry}", i + 1);
    }
}

pub fn format_instant(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

pub fn prompt_yes_no(question: &str) -> bool {
    print!("{question}");
    let _ = std::io::stdout().flush();
    let mut line = String::new();
    if std::io::stdin().read_line(&mut line).is_err() {
        return false;
    }
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
