use chrono::{DateTime, Utc};

use crate::common::{self, CliResult};

pub fn run(index: Option<usize>, now: DateTime<Utc>) -> CliResult {
    let (state, rotated) = common::load_synced(now)?;
    if rotated {
        common::save(&state)?;
    }
    let history = state.history();
    if history.is_empty() {
        println!("No past lists retained yet.");
        return Ok(());
    }
    match index {
        Some(i) => {
            if i == 0 || i > history.len() {
                return Err(
                    format!("no past list #{i}; {} lists retained", history.len()).into(),
                );
            }
            let list = history.get(i - 1)?;
            match list.recv_date() {
                Some(at) => println!("List #{i}, delivered {}:", common::format_instant(at)),
                None => println!("List #{i}:"),
            }
            common::print_entries(list);
        }
        None => {
            println!("Retained lists, oldest first:");
            for (i, list) in history.iter().enumerate() {
                let delivered = list
                    .recv_date()
                    .map(common::format_instant)
                    .unwrap_or_else(|| "never delivered".to_string());
                let read = if list.read_receipt() { "read" } else { "unread" };
                println!(
                    "{:>3}. {} entries, {delivered}, {read}",
                    i + 1,
                    list.len()
                );
            }
            println!("Run `modulo history <n>` to read one.");
        }
    }
    Ok(())
}
