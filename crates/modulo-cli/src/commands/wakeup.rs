use chrono::{DateTime, Utc};
use modulo_core::WakeupOutcome;

use crate::common::{self, CliResult};

pub fn run(yes: bool, now: DateTime<Utc>) -> CliResult {
    let (mut state, rotated) = common::load_synced(now)?;

    let mut prompted = false;
    let outcome = modulo_core::confirm_wakeup(&mut state, now, || {
        prompted = true;
        yes || common::prompt_yes_no("You're up early! Start a new day anyway? [y/N] ")
    });

    match outcome {
        WakeupOutcome::Confirmed => {
            common::save(&state)?;
            println!("Good morning, {}! A new day has begun.", state.username());
            if !state.today().is_empty() {
                println!("Run `modulo today` to read what yesterday left for you.");
            }
            Ok(())
        }
        WakeupOutcome::Rejected => {
            if rotated {
                common::save(&state)?;
            }
            if prompted {
                println!("Staying on the current day.");
                Ok(())
            } else {
                eprintln!(
                    "It's too early to start a new day; earliest wakeup is {}.",
                    state.wakeup_earliest()
                );
                eprintln!("Run `modulo set wakeup-earliest <time>` to change it.");
                Err("wakeup not confirmed".into())
            }
        }
    }
}
