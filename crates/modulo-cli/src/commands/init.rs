use chrono::{DateTime, Utc};
use modulo_core::{storage, ModuloState};

use crate::common::CliResult;

pub fn run(username: Option<String>, force: bool, now: DateTime<Utc>) -> CliResult {
    if !force && storage::load()?.is_some() {
        return Err("modulo is already initialized; pass --force to start over".into());
    }
    let username = username.unwrap_or_else(system_username);
    let state = ModuloState::new(username, now)?;
    storage::save(&state)?;

    println!("Welcome, {}! Modulo bridges the gap between today's", state.username());
    println!("thoughts and tomorrow's actions.");
    println!();
    println!("Earliest wakeup: {}", state.wakeup_earliest());
    println!("Latest wakeup:   {}", state.wakeup_latest());
    println!();
    println!("Run `modulo tomorrow <entry>` to send a thought to tomorrow,");
    println!("and `modulo today` to read what yesterday left for you.");
    Ok(())
}

fn system_username() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "user".to_string())
}
