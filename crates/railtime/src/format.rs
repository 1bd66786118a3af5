//! Formatting pass-throughs over chrono's strftime support.

use std::fmt::{self, Write};

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Datelike, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TimeError};

/// Default pattern for [`to_iso_date`].
pub const ISO_DATE: &str = "%Y-%m-%d";

/// Render `dt` with a strftime-style `pattern`.
///
/// # Errors
///
/// Returns [`TimeError::UnsupportedFormatPattern`] if chrono rejects the
/// pattern, or if a specifier needs data the instant does not carry.
pub fn to_formatted_string<Tz>(dt: &DateTime<Tz>, pattern: &str) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let items: Vec<Item<'_>> = StrftimeItems::new(pattern).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(TimeError::UnsupportedFormatPattern(format!("'{}'", pattern)));
    }

    let mut out = String::new();
    write!(out, "{}", dt.format_with_items(items.iter()))
        .map_err(|_| TimeError::UnsupportedFormatPattern(format!("'{}'", pattern)))?;
    Ok(out)
}

/// The calendar date of `dt`, `YYYY-MM-DD` unless another pattern is given.
pub fn to_iso_date<Tz>(dt: &DateTime<Tz>, pattern: Option<&str>) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    to_formatted_string(dt, pattern.unwrap_or(ISO_DATE))
}

/// RFC 3339 / ISO 8601 rendering with offset.
pub fn to_iso8601<Tz>(dt: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    dt.to_rfc3339()
}

/// Seconds since the Unix epoch.
pub fn to_epoch_seconds<Tz: TimeZone>(dt: &DateTime<Tz>) -> i64 {
    dt.timestamp()
}

/// Local calendar fields of an instant. `weekday` counts from Monday = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeFields {
    pub year: i64,
    pub month: i64,
    pub day: i64,
    pub hour: i64,
    pub minute: i64,
    pub second: i64,
    pub weekday: i64,
}

impl TimeFields {
    pub fn of<Tz: TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self {
            year: i64::from(dt.year()),
            month: i64::from(dt.month()),
            day: i64::from(dt.day()),
            hour: i64::from(dt.hour()),
            minute: i64::from(dt.minute()),
            second: i64::from(dt.second()),
            weekday: i64::from(dt.weekday().num_days_from_monday()),
        }
    }

    /// `[year, month, day, hour, minute, second, weekday]`.
    pub fn to_array(&self) -> [i64; 7] {
        [
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.weekday,
        ]
    }
}

/// `[year, month, day, hour, minute, second, weekday]` in `dt`'s own zone.
pub fn to_field_array<Tz: TimeZone>(dt: &DateTime<Tz>) -> [i64; 7] {
    TimeFields::of(dt).to_array()
}
