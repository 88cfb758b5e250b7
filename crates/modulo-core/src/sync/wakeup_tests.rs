//! Tests for the wakeup gate.

#[cfg(test)]
mod tests {
    use crate::clock;
    use crate::state::ModuloState;
    use crate::sync::{confirm_wakeup, WakeupOutcome};
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn setup() -> (ModuloState, DateTime<Utc>) {
        let t0 = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        let state = ModuloState::new("test", t0).unwrap();
        // Next 6:00 after the day pointer, i.e. tomorrow morning.
        let earliest = clock::next_occurrence(state.wakeup_earliest(), state.day_ptr());
        (state, earliest)
    }

    #[test]
    fn past_earliest_confirms_without_prompt() {
        let (mut state, earliest) = setup();
        state.push_tomorrow("X", earliest).unwrap();
        let day_ptr = state.day_ptr();
        let now = earliest + Duration::minutes(10);

        let outcome = confirm_wakeup(&mut state, now, || {
            panic!("prompt must not be invoked")
        });

        assert_eq!(outcome, WakeupOutcome::Confirmed);
        assert_eq!(state.today().get(0).unwrap(), "X");
        assert_eq!(state.today().recv_date(), Some(now));
        assert!(state.tomorrow().is_empty());
        assert_eq!(state.day_ptr(), day_ptr + Duration::days(1));
    }

    #[test]
    fn far_too_early_rejects_without_prompt() {
        let (mut state, earliest) = setup();
        let before = state.clone();
        let now = earliest - Duration::minutes(150);

        let outcome = confirm_wakeup(&mut state, now, || {
            panic!("prompt must not be invoked")
        });

        assert_eq!(outcome, WakeupOutcome::Rejected);
        assert_eq!(state, before);
    }

    #[test]
    fn inside_window_prompt_decides() {
        let (mut state, earliest) = setup();
        let now = earliest - Duration::minutes(60);

        let mut asked = false;
        let outcome = confirm_wakeup(&mut state, now, || {
            asked = true;
            true
        });
        assert!(asked);
        assert_eq!(outcome, WakeupOutcome::Confirmed);
    }

    #[test]
    fn inside_window_decline_leaves_state_untouched() {
        let (mut state, earliest) = setup();
        state.push_tomorrow("X", earliest).unwrap();
        let before = state.clone();
        let now = earliest - Duration::minutes(90);

        let outcome = confirm_wakeup(&mut state, now, || false);

        assert_eq!(outcome, WakeupOutcome::Rejected);
        assert_eq!(state, before);
    }

    #[test]
    fn window_boundary_is_inclusive() {
        let (mut state, earliest) = setup();
        let now = earliest - Duration::minutes(120);

        let mut asked = false;
        let _ = confirm_wakeup(&mut state, now, || {
            asked = true;
            false
        });
        assert!(asked);
    }

    #[test]
    fn confirmation_rotates_exactly_one_step_even_when_far_behind() {
        let (mut state, earliest) = setup();
        let day_ptr = state.day_ptr();
        // Several natural boundaries have elapsed, but the override is a
        // single forced step, not a catch-up.
        let now = earliest + Duration::days(3);

        let outcome = confirm_wakeup(&mut state, now, || {
            panic!("prompt must not be invoked")
        });

        assert_eq!(outcome, WakeupOutcome::Confirmed);
        assert_eq!(state.day_ptr(), day_ptr + Duration::days(1));
    }

    #[test]
    fn confirmation_retires_non_empty_today() {
        let (mut state, earliest) = setup();
        state.today.push("unfinished");
        state.push_tomorrow("next", earliest).unwrap();
        let now = earliest + Duration::minutes(1);

        let outcome = confirm_wakeup(&mut state, now, || true);

        assert_eq!(outcome, WakeupOutcome::Confirmed);
        assert_eq!(state.history().len(), 1);
        assert_eq!(state.history().get(0).unwrap().get(0).unwrap(), "unfinished");
        assert_eq!(state.today().get(0).unwrap(), "next");
    }
}
