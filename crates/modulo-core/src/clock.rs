//! Wall-clock time-of-day conversions.
//!
//! Times of day are minutes since local midnight; absolute instants are
//! UTC. Conversions between the two go through the system's local
//! timezone, which is as far as calendaring goes here -- there is no
//! named-zone support.
//!
//! ## Input grammar
//!
//! ```text
//! AM/PM:   1. H(am|pm)    2. H:MM(am|pm)
//! 24-hour: 3. H           4. H:MM
//! ```
//!
//! Whitespace and leading zeros are optional, matching is case-insensitive:
//! `9am`, `009:00 AM`, `9:00am`, and `9 : 00` all parse. Trailing text
//! after a valid match is ignored, so the output of [`ClockTime`]'s
//! `Display` impl (`"09:00 AM (09:00)"`) parses back to the same value.

use chrono::{DateTime, Duration, Local, LocalResult, NaiveDate, NaiveTime, TimeZone, Timelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;

pub const MINUTES_PER_DAY: u16 = 1440;

static TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(\d+)(?:\s*:\s*(\d+))?\s*(\S{1,2})?").expect("valid regex"));

/// A time of day in minutes since local midnight, always in `[0, 1440)`.
///
/// Serializes as a bare minute count; out-of-range values fail decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct ClockTime {
    minutes: u16,
}

impl ClockTime {
    /// Build from hour/minute components.
    ///
    /// Panics when out of range; intended for compile-time constants.
    pub const fn from_hm(hour: u16, minute: u16) -> Self {
        assert!(hour < 24 && minute < 60);
        Self {
            minutes: hour * 60 + minute,
        }
    }

    pub fn from_minutes(minutes: u16) -> Result<Self, ValidationError> {
        if minutes >= MINUTES_PER_DAY {
            return Err(ValidationError::MinutesOutOfRange { minutes });
        }
        Ok(Self { minutes })
    }

    /// Parse a user-supplied time specifier, see the module docs for the
    /// accepted grammar.
    ///
    /// The hour is taken modulo 12 before the am/pm offset applies, so
    /// `12am` is midnight and `12pm` is noon. 24-hour inputs that fall
    /// outside `[0, 1440)` minutes are rejected.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let fail = || ValidationError::TimeParse {
            input: input.to_string(),
        };
        let caps = TIME_RE.captures(input).ok_or_else(fail)?;
        let hour: u32 = caps
            .get(1)
            .ok_or_else(fail)?
            .as_str()
            .parse()
            .map_err(|_| fail())?;
        let minute: u32 = match caps.get(2) {
            Some(m) => m.as_str().parse().map_err(|_| fail())?,
            None => 0,
        };
        if minute >= 60 {
            return Err(fail());
        }
        let total = match caps.get(3) {
            Some(suffix) => {
                // The suffix must be exactly "am" or "pm", any casing.
                let offset = match suffix.as_str().to_ascii_lowercase().as_str() {
                    "am" => 0,
                    "pm" => 12 * 60,
                    _ => return Err(fail()),
                };
                (hour % 12) * 60 + minute + offset
            }
            None => hour * 60 + minute,
        };
        if total >= u32::from(MINUTES_PER_DAY) {
            return Err(fail());
        }
        Ok(Self {
            minutes: total as u16,
        })
    }

    pub fn minutes(self) -> u16 {
        self.minutes
    }

    pub fn hour(self) -> u16 {
        self.minutes / 60
    }

    pub fn minute(self) -> u16 {
        self.minutes % 60
    }

    fn naive_time(self) -> NaiveTime {
        NaiveTime::from_num_seconds_from_midnight_opt(u32::from(self.minutes) * 60, 0)
            .unwrap_or(NaiveTime::MIN)
    }
}

impl TryFrom<u16> for ClockTime {
    type Error = ValidationError;

    fn try_from(minutes: u16) -> Result<Self, Self::Error> {
        Self::from_minutes(minutes)
    }
}

impl From<ClockTime> for u16 {
    fn from(t: ClockTime) -> Self {
        t.minutes
    }
}

impl std::fmt::Display for ClockTime {
    /// 12-hour rendering with a parenthetical 24-hour equivalent,
    /// e.g. `09:00 AM (09:00)`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hours_24 = self.hour();
        let minutes = self.minute();
        let hours_12 = (12 + hours_24 - 1) % 12 + 1;
        let am_pm = if hours_24 < 12 { "AM" } else { "PM" };
        write!(f, "{hours_12:02}:{minutes:02} {am_pm} ({hours_24:02}:{minutes:02})")
    }
}

/// Resolve a local calendar date + time of day to a UTC instant.
///
/// Ambiguous local times (fall-back transitions) resolve to the earlier
/// instant; nonexistent ones (spring-forward gaps) to the first valid
/// instant after the gap.
fn local_instant(date: NaiveDate, t: ClockTime) -> DateTime<Utc> {
    let naive = date.and_time(t.naive_time());
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => Local
            .from_local_datetime(&(naive + Duration::hours(1)))
            .earliest()
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(|| Utc.from_utc_datetime(&naive)),
    }
}

/// The latest instant at or before `reference` whose local time-of-day
/// equals `t`.
pub fn most_recent_occurrence(t: ClockTime, reference: DateTime<Utc>) -> DateTime<Utc> {
    let local_date = reference.with_timezone(&Local).date_naive();
    let candidate = local_instant(local_date, t);
    if candidate > reference {
        local_instant(local_date - Duration::days(1), t)
    } else {
        candidate
    }
}

/// The earliest instant at or after `reference` whose local time-of-day
/// equals `t`.
pub fn next_occurrence(t: ClockTime, reference: DateTime<Utc>) -> DateTime<Utc> {
    let local_date = reference.with_timezone(&Local).date_naive();
    let candidate = local_instant(local_date, t);
    if candidate < reference {
        local_instant(local_date + Duration::days(1), t)
    } else {
        candidate
    }
}

/// The occurrence of `t` exactly `days` calendar days after the one
/// aligned with `anchor`. Used to advance the day pointer without
/// drifting off the wakeup boundary.
pub fn occurrence_after(t: ClockTime, anchor: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    let local_date = anchor.with_timezone(&Local).date_naive();
    local_instant(local_date + Duration::days(days), t)
}

/// Signed elapsed seconds, `reference - anchor`.
pub fn offset_seconds(reference: DateTime<Utc>, anchor: DateTime<Utc>) -> i64 {
    (reference - anchor).num_seconds()
}

/// Local time-of-day of an instant, in minutes since midnight.
pub fn minute_of_day(instant: DateTime<Utc>) -> u16 {
    (instant.with_timezone(&Local).time().num_seconds_from_midnight() / 60) as u16
}
