use chrono::{DateTime, Utc};
use clap::Subcommand;
use modulo_core::ClockTime;

use crate::common::{self, CliResult};

#[derive(Subcommand)]
pub enum GetAction {
    /// Print all preferences
    Preferences,
    /// Print the username
    Username,
    /// Print the wakeup window
    Wakeup,
    /// Print the entry delimiter
    Delimiter,
}

#[derive(Subcommand)]
pub enum SetAction {
    /// Set the username
    Username { name: String },
    /// Set the earliest wakeup time
    WakeupEarliest { time: String },
    /// Set the latest wakeup time (the daily boundary)
    WakeupLatest { time: String },
    /// Set the entry delimiter
    Delimiter { delimiter: String },
}

pub fn run_get(action: GetAction, now: DateTime<Utc>) -> CliResult {
    let (state, rotated) = common::load_synced(now)?;
    if rotated {
        common::save(&state)?;
    }
    match action {
        GetAction::Preferences => {
            println!("username:        {}", state.username());
            println!("wakeup_earliest: {}", state.wakeup_earliest());
            println!("wakeup_latest:   {}", state.wakeup_latest());
            println!("entry_delimiter: {}", state.entry_delimiter());
        }
        GetAction::Username => println!("{}", state.username()),
        GetAction::Wakeup => {
            println!("earliest: {}", state.wakeup_earliest());
            println!("latest:   {}", state.wakeup_latest());
        }
        GetAction::Delimiter => println!("{}", state.entry_delimiter()),
    }
    Ok(())
}

pub fn run_set(action: SetAction, now: DateTime<Utc>) -> CliResult {
    let (mut state, _) = common::load_synced(now)?;
    match action {
        SetAction::Username { name } => {
            let prev = state.username().to_string();
            state.set_username(name)?;
            println!("Updated username: {prev} -> {}", state.username());
        }
        SetAction::WakeupEarliest { time } => {
            let wakeup = parse_wakeup(&time)?;
            let prev = state.wakeup_earliest();
            state.set_wakeup_earliest(wakeup);
            println!("Updated earliest wakeup: {prev} -> {wakeup}");
        }
        SetAction::WakeupLatest { time } => {
            let wakeup = parse_wakeup(&time)?;
            let prev = state.wakeup_latest();
            state.set_wakeup_latest(wakeup, now);
            println!("Updated latest wakeup: {prev} -> {wakeup}");
        }
        SetAction::Delimiter { delimiter } => {
            let prev = state.entry_delimiter().to_string();
            state.set_entry_delimiter(delimiter)?;
            println!("Updated entry delimiter: {prev} -> {}", state.entry_delimiter());
        }
    }
    common::save(&state)?;
    Ok(())
}

fn parse_wakeup(input: &str) -> Result<ClockTime, Box<dyn std::error::Error>> {
    ClockTime::parse(input).map_err(|err| {
        eprintln!("Your input must match one of the following formats:");
        eprintln!("  AM/PM:   9am, 9:30pm");
        eprintln!("  24-hour: 9, 21:30");
        eprintln!("Whitespace and leading zeros are optional; matching is case-insensitive.");
        err.into()
    })
}
