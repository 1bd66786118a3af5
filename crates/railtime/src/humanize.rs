//! Humanized time distances ("about 2 hours", "3 days").
//!
//! The elapsed time between two instants is absolute-valued and bucketed
//! against an ordered threshold table, smallest first:
//!
//! | elapsed (seconds) | phrase                                    |
//! |-------------------|-------------------------------------------|
//! | < 60              | `less than a minute`                      |
//! | < 3 600           | `about N minutes` (N = elapsed / 60)      |
//! | < 86 400          | `about N hours` (N = elapsed / 3 600)     |
//! | < 30 days         | `N days` (N = elapsed / 86 400)           |
//! | < 365 days        | `about N months` (N = elapsed / 30 days)  |
//! | otherwise         | `about N years` (N = elapsed / 365 days)  |
//!
//! N is rounded half away from zero and never drops below 1. Comparisons are
//! strict, so exactly 3 600 seconds is "about 1 hours". The phrase templates
//! are fixed: the count is never used to pick a singular form.

use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::duration::{
    SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, SECONDS_PER_MONTH, SECONDS_PER_YEAR,
};

/// A bucketed distance of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "bucket", content = "count", rename_all = "snake_case")]
pub enum Distance {
    LessThanAMinute,
    Minutes(i64),
    Hours(i64),
    Days(i64),
    Months(i64),
    Years(i64),
}

impl Distance {
    /// Bucket an elapsed number of seconds. Negative values are treated as
    /// their absolute value.
    pub fn from_seconds(elapsed: i64) -> Self {
        let elapsed = elapsed.unsigned_abs();

        if elapsed < SECONDS_PER_MINUTE as u64 {
            Distance::LessThanAMinute
        } else if elapsed < SECONDS_PER_HOUR as u64 {
            Distance::Minutes(rounded_count(elapsed, SECONDS_PER_MINUTE))
        } else if elapsed < SECONDS_PER_DAY as u64 {
            Distance::Hours(rounded_count(elapsed, SECONDS_PER_HOUR))
        } else if elapsed < SECONDS_PER_MONTH as u64 {
            Distance::Days(rounded_count(elapsed, SECONDS_PER_DAY))
        } else if elapsed < SECONDS_PER_YEAR as u64 {
            Distance::Months(rounded_count(elapsed, SECONDS_PER_MONTH))
        } else {
            Distance::Years(rounded_count(elapsed, SECONDS_PER_YEAR))
        }
    }

    /// The count carried by the bucket (0 for `LessThanAMinute`).
    pub fn count(&self) -> i64 {
        match *self {
            Distance::LessThanAMinute => 0,
            Distance::Minutes(n)
            | Distance::Hours(n)
            | Distance::Days(n)
            | Distance::Months(n)
            | Distance::Years(n) => n,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Distance::LessThanAMinute => f.write_str("less than a minute"),
            Distance::Minutes(n) => write!(f, "about {} minutes", n),
            Distance::Hours(n) => write!(f, "about {} hours", n),
            Distance::Days(n) => write!(f, "{} days", n),
            Distance::Months(n) => write!(f, "about {} months", n),
            Distance::Years(n) => write!(f, "about {} years", n),
        }
    }
}

/// `round(elapsed / unit)` with halves rounded away from zero, clamped to at least 1.
fn rounded_count(elapsed: u64, unit: i64) -> i64 {
    let unit = unit as u64;
    let n = (elapsed + unit / 2) / unit;
    i64::try_from(n).unwrap_or(i64::MAX).max(1)
}

/// Which side of the reference instant a time lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// `from` is at or before `to`.
    Past,
    /// `from` is after `to`.
    Future,
}

/// Whole seconds between two instants, `to - from`, truncated toward zero.
///
/// The gap is measured at full precision first, so `12:00:00.900` to
/// `12:01:00.100` is 59 seconds, not 60.
pub fn elapsed_seconds<A: TimeZone, B: TimeZone>(from: &DateTime<A>, to: &DateTime<B>) -> i64 {
    to.with_timezone(&Utc)
        .signed_duration_since(from.with_timezone(&Utc))
        .num_seconds()
}

/// Bucket an elapsed number of seconds into a [`Distance`].
pub fn distance_of_seconds(elapsed: i64) -> Distance {
    Distance::from_seconds(elapsed)
}

/// The [`Distance`] between two instants, ignoring direction.
pub fn distance_between<A: TimeZone, B: TimeZone>(
    from: &DateTime<A>,
    to: &DateTime<B>,
) -> Distance {
    Distance::from_seconds(elapsed_seconds(from, to))
}

/// Humanized distance between two instants, e.g. `"about 2 hours"`.
///
/// Symmetric in its arguments. Equal instants give `"less than a minute"`.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use railtime::distance_in_words;
///
/// let from = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
/// let to = Utc.with_ymd_and_hms(2026, 3, 1, 14, 10, 0).unwrap();
/// assert_eq!(distance_in_words(&from, &to), "about 2 hours");
/// ```
pub fn distance_in_words<A: TimeZone, B: TimeZone>(
    from: &DateTime<A>,
    to: &DateTime<B>,
) -> String {
    distance_between(from, to).to_string()
}

/// Humanized distance from `from` to the current wall-clock time.
pub fn time_ago_in_words<Tz: TimeZone>(from: &DateTime<Tz>) -> String {
    distance_in_words(from, &Utc::now())
}

/// Whether `from` lies in the past or the future relative to `to`.
pub fn direction_between<A: TimeZone, B: TimeZone>(
    from: &DateTime<A>,
    to: &DateTime<B>,
) -> Direction {
    if to.with_timezone(&Utc) >= from.with_timezone(&Utc) {
        Direction::Past
    } else {
        Direction::Future
    }
}

/// Humanized distance with a direction marker: `"about 2 hours ago"` when
/// `from` is at or before `to`, `"in about 2 hours"` when it is after.
pub fn relative_in_words<A: TimeZone, B: TimeZone>(
    from: &DateTime<A>,
    to: &DateTime<B>,
) -> String {
    let phrase = distance_in_words(from, to);
    match direction_between(from, to) {
        Direction::Past => format!("{} ago", phrase),
        Direction::Future => format!("in {}", phrase),
    }
}
