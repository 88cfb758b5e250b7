use chrono::{DateTime, Utc};

use crate::common::{self, CliResult};

/// Append to tomorrow's list. The configured delimiter splits the
/// argument into several entries, so a whole evening of thoughts can be
/// recorded in one go.
pub fn run_tomorrow(entry: &str, now: DateTime<Utc>) -> CliResult {
    let (mut state, _) = common::load_synced(now)?;
    let delimiter = state.entry_delimiter().to_string();
    let mut added = 0;
    for piece in entry.split(delimiter.as_str()) {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }
        state.push_tomorrow(piece, now)?;
        added += 1;
    }
    if added == 0 {
        return Err("entry is empty".into());
    }
    common::save(&state)?;
    if added == 1 {
        println!("Recorded 1 entry for tomorrow ({} total).", state.tomorrow().len());
    } else {
        println!("Recorded {added} entries for tomorrow ({} total).", state.tomorrow().len());
    }
    Ok(())
}

pub fn run_remove(index: usize, now: DateTime<Utc>) -> CliResult {
    let (mut state, _) = common::load_synced(now)?;
    let count = state.tomorrow().len();
    if index == 0 || index > count {
        return Err(format!("no entry #{index}; `modulo peek` lists {count} entries").into());
    }
    let removed = state.remove_tomorrow(index - 1)?;
    common::save(&state)?;
    println!("Removed: {removed}");
    Ok(())
}

pub fn run_peek(now: DateTime<Utc>) -> CliResult {
    let (state, rotated) = common::load_synced(now)?;
    if rotated {
        common::save(&state)?;
    }
    if state.tomorrow().is_empty() {
        println!("Nothing queued for tomorrow yet.");
        return Ok(());
    }
    println!("Queued for tomorrow:");
    common::print_entries(state.tomorrow());
    Ok(())
}
