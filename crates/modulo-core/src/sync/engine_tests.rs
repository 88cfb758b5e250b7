//! Tests for the sync engine.

#[cfg(test)]
mod tests {
    use crate::clock;
    use crate::state::ModuloState;
    use crate::sync::{check_sync, sync_status, SyncStatus};
    use chrono::{DateTime, Duration, TimeZone, Utc};

    // Mid-January keeps every test clear of DST transitions regardless of
    // the host timezone.
    fn setup() -> (ModuloState, DateTime<Utc>) {
        let t0 = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        let state = ModuloState::new("test", t0).unwrap();
        let day_ptr = state.day_ptr();
        (state, day_ptr)
    }

    #[test]
    fn in_sync_before_boundary() {
        let (mut state, day_ptr) = setup();
        let now = day_ptr + Duration::hours(23);
        assert_eq!(sync_status(&state, now), SyncStatus::InSync);
        assert!(!check_sync(&mut state, now));
        assert_eq!(state.day_ptr(), day_ptr);
    }

    #[test]
    fn backward_clock_jump_is_a_no_op() {
        let (mut state, day_ptr) = setup();
        let before = state.clone();
        let now = day_ptr - Duration::hours(30);
        assert_eq!(sync_status(&state, now), SyncStatus::InSync);
        assert!(!check_sync(&mut state, now));
        assert_eq!(state, before);
    }

    #[test]
    fn single_boundary_promotes_tomorrow() {
        let (mut state, day_ptr) = setup();
        state.push_tomorrow("X", day_ptr).unwrap();
        let now = day_ptr + Duration::hours(25);

        assert_eq!(sync_status(&state, now), SyncStatus::Behind(1));
        assert!(check_sync(&mut state, now));

        assert_eq!(state.today().len(), 1);
        assert_eq!(state.today().get(0).unwrap(), "X");
        assert_eq!(state.today().recv_date(), Some(now));
        assert!(state.tomorrow().is_empty());
        assert!(state.history().is_empty());
        assert_eq!(state.day_ptr(), day_ptr + Duration::days(1));
        assert_eq!(
            clock::minute_of_day(state.day_ptr()),
            state.wakeup_latest().minutes()
        );
    }

    #[test]
    fn single_boundary_retires_unread_today_to_history() {
        let (mut state, day_ptr) = setup();
        state.today.push("leftover");
        state.today.mark_read();
        state.push_tomorrow("fresh", day_ptr).unwrap();

        assert!(check_sync(&mut state, day_ptr + Duration::hours(26)));

        assert_eq!(state.history().len(), 1);
        let retired = state.history().get(0).unwrap();
        assert_eq!(retired.get(0).unwrap(), "leftover");
        // The receipt travels with the list; nothing resets it.
        assert!(retired.read_receipt());
        assert_eq!(state.today().get(0).unwrap(), "fresh");
    }

    #[test]
    fn multi_day_gap_flushes_both_lists_chronologically() {
        let (mut state, day_ptr) = setup();
        state.today.push("A");
        state.push_tomorrow("B", day_ptr).unwrap();
        let now = day_ptr + Duration::hours(50);

        assert_eq!(sync_status(&state, now), SyncStatus::Behind(2));
        assert!(check_sync(&mut state, now));

        assert_eq!(state.history().len(), 2);
        assert_eq!(state.history().get(0).unwrap().get(0).unwrap(), "A");
        assert_eq!(state.history().get(1).unwrap().get(0).unwrap(), "B");
        assert!(state.today().is_empty());
        assert!(state.tomorrow().is_empty());
        assert_eq!(state.day_ptr(), day_ptr + Duration::days(2));
    }

    #[test]
    fn multi_day_gap_skips_empty_lists() {
        let (mut state, day_ptr) = setup();
        let now = day_ptr + Duration::days(4) + Duration::hours(3);

        assert_eq!(sync_status(&state, now), SyncStatus::Behind(4));
        assert!(check_sync(&mut state, now));

        assert!(state.history().is_empty());
        assert_eq!(state.day_ptr(), day_ptr + Duration::days(4));
    }

    #[test]
    fn check_sync_is_idempotent() {
        let (mut state, day_ptr) = setup();
        state.today.push("A");
        state.push_tomorrow("B", day_ptr).unwrap();
        let now = day_ptr + Duration::hours(50);

        assert!(check_sync(&mut state, now));
        let after_first = state.clone();
        assert!(!check_sync(&mut state, now));
        assert_eq!(state, after_first);
    }

    #[test]
    fn history_stays_bounded_across_many_gaps() {
        let (mut state, day_ptr) = setup();
        let mut now = day_ptr;
        for i in 0..5 {
            state.push_tomorrow(format!("entry {i}"), now).unwrap();
            now += Duration::hours(49);
            assert!(check_sync(&mut state, now));
        }
        assert_eq!(state.history().len(), 3);
        // Oldest surviving list is from round 2 of 0..5.
        assert_eq!(state.history().get(0).unwrap().get(0).unwrap(), "entry 2");
    }
}
