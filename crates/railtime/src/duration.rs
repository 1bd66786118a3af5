//! Fixed-length durations built from a magnitude and a calendar-ish unit.
//!
//! A [`Duration`] is a `(magnitude, unit)` pair that always resolves to the
//! same number of seconds through a fixed multiplier table:
//!
//! | unit       | seconds            |
//! |------------|--------------------|
//! | minute     | 60                 |
//! | hour       | 3 600              |
//! | day        | 86 400             |
//! | week       | 7 × 86 400         |
//! | month      | 30 × 86 400        |
//! | decade     | 10 × 365 × 86 400  |
//! | leap year  | 366 × 86 400       |
//!
//! Month, decade and leap year are approximations, not calendar-exact spans:
//! one month is always thirty days and a decade ignores leap days. Callers
//! that need calendar-exact arithmetic should use chrono's `Months` instead.
//!
//! ```
//! use railtime::{duration, DurationExt, Unit};
//! use chrono::{TimeZone, Utc};
//!
//! let d = duration(5, Unit::Minute);
//! assert_eq!(d.to_seconds(), 300);
//! assert_eq!(5_i64.minutes(), d);
//!
//! let t = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
//! assert_eq!(d.before(&t).unwrap(), Utc.with_ymd_and_hms(2026, 3, 1, 11, 55, 0).unwrap());
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TimeError};

pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
pub const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;
pub const SECONDS_PER_WEEK: i64 = 7 * SECONDS_PER_DAY;
/// Thirty days, regardless of the calendar month.
pub const SECONDS_PER_MONTH: i64 = 30 * SECONDS_PER_DAY;
/// 365-day year, used by the decade unit and the humanizer.
pub const SECONDS_PER_YEAR: i64 = 365 * SECONDS_PER_DAY;
pub const SECONDS_PER_DECADE: i64 = 10 * SECONDS_PER_YEAR;
pub const SECONDS_PER_LEAP_YEAR: i64 = 366 * SECONDS_PER_DAY;

/// The unit a [`Duration`] magnitude is counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Minute,
    Hour,
    Day,
    Week,
    /// 30 days.
    Month,
    /// 10 × 365 days.
    Decade,
    /// 366 days.
    LeapYear,
}

impl Unit {
    pub const ALL: [Unit; 7] = [
        Unit::Minute,
        Unit::Hour,
        Unit::Day,
        Unit::Week,
        Unit::Month,
        Unit::Decade,
        Unit::LeapYear,
    ];

    /// Number of seconds in one of this unit.
    pub const fn seconds(self) -> i64 {
        match self {
            Unit::Minute => SECONDS_PER_MINUTE,
            Unit::Hour => SECONDS_PER_HOUR,
            Unit::Day => SECONDS_PER_DAY,
            Unit::Week => SECONDS_PER_WEEK,
            Unit::Month => SECONDS_PER_MONTH,
            Unit::Decade => SECONDS_PER_DECADE,
            Unit::LeapYear => SECONDS_PER_LEAP_YEAR,
        }
    }

    /// Singular display name (e.g. `"minute"`, `"leap year"`).
    pub const fn singular(self) -> &'static str {
        match self {
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::Day => "day",
            Unit::Week => "week",
            Unit::Month => "month",
            Unit::Decade => "decade",
            Unit::LeapYear => "leap year",
        }
    }

    /// Plural display name (e.g. `"minutes"`, `"leap years"`).
    pub const fn plural(self) -> &'static str {
        match self {
            Unit::Minute => "minutes",
            Unit::Hour => "hours",
            Unit::Day => "days",
            Unit::Week => "weeks",
            Unit::Month => "months",
            Unit::Decade => "decades",
            Unit::LeapYear => "leap years",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.singular())
    }
}

impl FromStr for Unit {
    type Err = TimeError;

    /// Parse a unit tag. Singular and plural spellings are synonyms and the
    /// match is case-insensitive; `_`, `-` and spaces are ignored so
    /// `"leap_year"`, `"leap-years"` and `"LeapYear"` all parse.
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "minute" | "minutes" => Ok(Unit::Minute),
            "hour" | "hours" => Ok(Unit::Hour),
            "day" | "days" => Ok(Unit::Day),
            "week" | "weeks" => Ok(Unit::Week),
            "month" | "months" => Ok(Unit::Month),
            "decade" | "decades" => Ok(Unit::Decade),
            "leapyear" | "leapyears" => Ok(Unit::LeapYear),
            _ => Err(TimeError::UnsupportedUnit(format!("'{}'", s.trim()))),
        }
    }
}

/// An immutable `(magnitude, unit)` span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Duration {
    magnitude: i64,
    unit: Unit,
}

/// Build a [`Duration`] of `magnitude` units.
pub const fn duration(magnitude: i64, unit: Unit) -> Duration {
    Duration::new(magnitude, unit)
}

impl Duration {
    pub const fn new(magnitude: i64, unit: Unit) -> Self {
        Self { magnitude, unit }
    }

    /// Build a duration from a textual unit tag such as `"minutes"` or `"week"`.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::UnsupportedUnit`] if the tag is not one of the
    /// seven recognized units.
    pub fn parse(magnitude: i64, unit: &str) -> Result<Self> {
        Ok(Self::new(magnitude, unit.parse()?))
    }

    pub const fn magnitude(&self) -> i64 {
        self.magnitude
    }

    pub const fn unit(&self) -> Unit {
        self.unit
    }

    /// Total length in seconds: `magnitude × seconds-per-unit`.
    ///
    /// Saturates at the `i64` limits; a saturated value is rejected by
    /// [`Duration::to_time_delta`] and everything built on it.
    pub const fn to_seconds(&self) -> i64 {
        self.magnitude.saturating_mul(self.unit.seconds())
    }

    /// Convert to a chrono [`TimeDelta`].
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::OutOfRange`] if the span exceeds what chrono can represent.
    pub fn to_time_delta(&self) -> Result<TimeDelta> {
        TimeDelta::try_seconds(self.to_seconds())
            .ok_or_else(|| TimeError::OutOfRange(format!("{} exceeds the representable span", self)))
    }

    /// The instant this duration before `reference`.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::OutOfRange`] if the result falls outside chrono's
    /// supported date range.
    pub fn before<Tz: TimeZone>(&self, reference: &DateTime<Tz>) -> Result<DateTime<Tz>> {
        let delta = self.to_time_delta()?;
        let result = reference.clone().checked_sub_signed(delta).ok_or_else(|| {
            TimeError::OutOfRange(format!("{} before {:?}", self, reference.naive_utc()))
        })?;
        debug!("{} before {:?} = {:?}", self, reference.naive_utc(), result.naive_utc());
        Ok(result)
    }

    /// The instant this duration after `reference`.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::OutOfRange`] if the result falls outside chrono's
    /// supported date range.
    pub fn after<Tz: TimeZone>(&self, reference: &DateTime<Tz>) -> Result<DateTime<Tz>> {
        let delta = self.to_time_delta()?;
        let result = reference.clone().checked_add_signed(delta).ok_or_else(|| {
            TimeError::OutOfRange(format!("{} after {:?}", self, reference.naive_utc()))
        })?;
        debug!("{} after {:?} = {:?}", self, reference.naive_utc(), result.naive_utc());
        Ok(result)
    }

    /// This duration before the current wall-clock time.
    pub fn ago(&self) -> Result<DateTime<Utc>> {
        self.before(&Utc::now())
    }

    /// This duration after the current wall-clock time.
    pub fn from_now(&self) -> Result<DateTime<Utc>> {
        self.after(&Utc::now())
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.magnitude.abs() == 1 {
            self.unit.singular()
        } else {
            self.unit.plural()
        };
        write!(f, "{} {}", self.magnitude, name)
    }
}

impl TryFrom<Duration> for TimeDelta {
    type Error = TimeError;

    fn try_from(d: Duration) -> Result<Self> {
        d.to_time_delta()
    }
}

/// Fluent constructors on integers: `5_i64.minutes()`, `2_u32.weeks()`.
///
/// Singular and plural spellings build the same value.
pub trait DurationExt: Sized {
    fn to_duration(self, unit: Unit) -> Duration;

    fn minute(self) -> Duration {
        self.to_duration(Unit::Minute)
    }
    fn minutes(self) -> Duration {
        self.to_duration(Unit::Minute)
    }
    fn hour(self) -> Duration {
        self.to_duration(Unit::Hour)
    }
    fn hours(self) -> Duration {
        self.to_duration(Unit::Hour)
    }
    fn day(self) -> Duration {
        self.to_duration(Unit::Day)
    }
    fn days(self) -> Duration {
        self.to_duration(Unit::Day)
    }
    fn week(self) -> Duration {
        self.to_duration(Unit::Week)
    }
    fn weeks(self) -> Duration {
        self.to_duration(Unit::Week)
    }
    fn month(self) -> Duration {
        self.to_duration(Unit::Month)
    }
    fn months(self) -> Duration {
        self.to_duration(Unit::Month)
    }
    fn decade(self) -> Duration {
        self.to_duration(Unit::Decade)
    }
    fn decades(self) -> Duration {
        self.to_duration(Unit::Decade)
    }
    fn leap_year(self) -> Duration {
        self.to_duration(Unit::LeapYear)
    }
    fn leap_years(self) -> Duration {
        self.to_duration(Unit::LeapYear)
    }
}

macro_rules! impl_duration_ext {
    ($($t:ty),*) => {
        $(
            impl DurationExt for $t {
                fn to_duration(self, unit: Unit) -> Duration {
                    Duration::new(i64::from(self), unit)
                }
            }
        )*
    };
}

impl_duration_ext!(i32, i64, u32);
