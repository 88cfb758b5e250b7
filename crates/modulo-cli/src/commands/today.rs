use chrono::{DateTime, Utc};

use crate::common::{self, CliResult};

pub fn run(now: DateTime<Utc>) -> CliResult {
    let (mut state, rotated) = common::load_synced(now)?;
    let mut dirty = rotated;

    if state.today().is_empty() {
        println!("Nothing to read today.");
    } else {
        match state.today().recv_date() {
            Some(at) => println!(
                "Entries from your past self (delivered {}):",
                common::format_instant(at)
            ),
            None => println!("Entries from your past self:"),
        }
        common::print_entries(state.today());
        if !state.today().read_receipt() {
            state.mark_today_read();
            dirty = true;
        }
    }

    if dirty {
        common::save(&state)?;
    }
    Ok(())
}
