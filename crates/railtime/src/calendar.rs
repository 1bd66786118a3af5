//! Calendar boundaries, day/month names, and day counts.
//!
//! Boundaries keep the instant's own zone: the beginning of a day in
//! `America/New_York` is local midnight there. End boundaries land on the
//! last whole second (`23:59:59`). When a boundary's local time falls in a
//! DST gap the helpers return [`TimeError::InvalidDate`]; when it is
//! ambiguous the earlier instant wins.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Month, NaiveDate, NaiveDateTime, TimeDelta, TimeZone};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::{CalendarOptions, WeekStart};
use crate::error::{Result, TimeError};

/// Resolve a local wall-clock time in `tz`.
fn localize<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> Result<DateTime<Tz>> {
    tz.from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| TimeError::InvalidDate(format!("{} does not exist in this zone", naive)))
}

fn at_start<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> Result<DateTime<Tz>> {
    let naive = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| TimeError::InvalidDate(format!("{}", date)))?;
    localize(tz, naive)
}

fn at_end<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> Result<DateTime<Tz>> {
    let naive = date
        .and_hms_opt(23, 59, 59)
        .ok_or_else(|| TimeError::InvalidDate(format!("{}", date)))?;
    localize(tz, naive)
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| TimeError::InvalidDate(format!("year {} month {}", year, month)))
}

fn last_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    let (y, m) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    first_of_month(year, month)?;
    first_of_month(y, m)?
        .pred_opt()
        .ok_or_else(|| TimeError::InvalidDate(format!("year {} month {}", year, month)))
}

fn shift_days(date: NaiveDate, days: i64) -> Result<NaiveDate> {
    date.checked_add_signed(TimeDelta::days(days))
        .ok_or_else(|| TimeError::OutOfRange(format!("{} shifted by {} days", date, days)))
}

// ── Day ─────────────────────────────────────────────────────────────────────

pub fn beginning_of_day<Tz: TimeZone>(dt: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    at_start(&dt.timezone(), dt.date_naive())
}

pub fn end_of_day<Tz: TimeZone>(dt: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    at_end(&dt.timezone(), dt.date_naive())
}

/// Same wall-clock time on the previous day.
pub fn yesterday<Tz: TimeZone>(dt: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    let date = shift_days(dt.date_naive(), -1)?;
    localize(&dt.timezone(), date.and_time(dt.time()))
}

/// Same wall-clock time on the next day.
pub fn tomorrow<Tz: TimeZone>(dt: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    let date = shift_days(dt.date_naive(), 1)?;
    localize(&dt.timezone(), date.and_time(dt.time()))
}

// ── Week ────────────────────────────────────────────────────────────────────

/// Midnight on the first day of `dt`'s week.
pub fn beginning_of_week<Tz: TimeZone>(
    dt: &DateTime<Tz>,
    week_start: WeekStart,
) -> Result<DateTime<Tz>> {
    let offset = week_start.days_since_start(dt.weekday());
    let start = shift_days(dt.date_naive(), -offset)?;
    debug!("week of {} starts {} ({})", dt.date_naive(), start, week_start);
    at_start(&dt.timezone(), start)
}

/// The last second of the final day of `dt`'s week.
pub fn end_of_week<Tz: TimeZone>(dt: &DateTime<Tz>, week_start: WeekStart) -> Result<DateTime<Tz>> {
    let remaining = 6 - week_start.days_since_start(dt.weekday());
    let end = shift_days(dt.date_naive(), remaining)?;
    at_end(&dt.timezone(), end)
}

// ── Month ───────────────────────────────────────────────────────────────────

pub fn beginning_of_month<Tz: TimeZone>(dt: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    at_start(&dt.timezone(), first_of_month(dt.year(), dt.month())?)
}

pub fn end_of_month<Tz: TimeZone>(dt: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    at_end(&dt.timezone(), last_of_month(dt.year(), dt.month())?)
}

// ── Quarter ─────────────────────────────────────────────────────────────────

fn quarter_first_month(month: u32) -> u32 {
    ((month - 1) / 3) * 3 + 1
}

pub fn beginning_of_quarter<Tz: TimeZone>(dt: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    let month = quarter_first_month(dt.month());
    at_start(&dt.timezone(), first_of_month(dt.year(), month)?)
}

pub fn end_of_quarter<Tz: TimeZone>(dt: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    let month = quarter_first_month(dt.month()) + 2;
    at_end(&dt.timezone(), last_of_month(dt.year(), month)?)
}

// ── Year ────────────────────────────────────────────────────────────────────

pub fn beginning_of_year<Tz: TimeZone>(dt: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    at_start(&dt.timezone(), first_of_month(dt.year(), 1)?)
}

pub fn end_of_year<Tz: TimeZone>(dt: &DateTime<Tz>) -> Result<DateTime<Tz>> {
    at_end(&dt.timezone(), last_of_month(dt.year(), 12)?)
}

// ── Boundary dispatch ───────────────────────────────────────────────────────

/// A named calendar boundary, for callers that select one at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Boundary {
    BeginningOfDay,
    EndOfDay,
    BeginningOfWeek,
    EndOfWeek,
    BeginningOfMonth,
    EndOfMonth,
    BeginningOfQuarter,
    EndOfQuarter,
    BeginningOfYear,
    EndOfYear,
}

impl Boundary {
    pub const ALL: [Boundary; 10] = [
        Boundary::BeginningOfDay,
        Boundary::EndOfDay,
        Boundary::BeginningOfWeek,
        Boundary::EndOfWeek,
        Boundary::BeginningOfMonth,
        Boundary::EndOfMonth,
        Boundary::BeginningOfQuarter,
        Boundary::EndOfQuarter,
        Boundary::BeginningOfYear,
        Boundary::EndOfYear,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Boundary::BeginningOfDay => "beginning_of_day",
            Boundary::EndOfDay => "end_of_day",
            Boundary::BeginningOfWeek => "beginning_of_week",
            Boundary::EndOfWeek => "end_of_week",
            Boundary::BeginningOfMonth => "beginning_of_month",
            Boundary::EndOfMonth => "end_of_month",
            Boundary::BeginningOfQuarter => "beginning_of_quarter",
            Boundary::EndOfQuarter => "end_of_quarter",
            Boundary::BeginningOfYear => "beginning_of_year",
            Boundary::EndOfYear => "end_of_year",
        }
    }

    /// Compute this boundary for `dt`. Only week boundaries read `options`.
    pub fn apply<Tz: TimeZone>(
        self,
        dt: &DateTime<Tz>,
        options: &CalendarOptions,
    ) -> Result<DateTime<Tz>> {
        match self {
            Boundary::BeginningOfDay => beginning_of_day(dt),
            Boundary::EndOfDay => end_of_day(dt),
            Boundary::BeginningOfWeek => beginning_of_week(dt, options.week_start),
            Boundary::EndOfWeek => end_of_week(dt, options.week_start),
            Boundary::BeginningOfMonth => beginning_of_month(dt),
            Boundary::EndOfMonth => end_of_month(dt),
            Boundary::BeginningOfQuarter => beginning_of_quarter(dt),
            Boundary::EndOfQuarter => end_of_quarter(dt),
            Boundary::BeginningOfYear => beginning_of_year(dt),
            Boundary::EndOfYear => end_of_year(dt),
        }
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Boundary {
    type Err = TimeError;

    /// Accepts `beginning_of_week`, `beginning-of-week` and `start-of-week`.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        let normalized = match normalized.strip_prefix("start_") {
            Some(rest) => format!("beginning_{}", rest),
            None => normalized,
        };
        Boundary::ALL
            .into_iter()
            .find(|b| b.name() == normalized)
            .ok_or_else(|| TimeError::InvalidOption(format!("unknown boundary '{}'", s.trim())))
    }
}

// ── Names ───────────────────────────────────────────────────────────────────

/// Full weekday name, e.g. `"Monday"`.
pub fn day_name<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    dt.date_naive().format("%A").to_string()
}

/// Abbreviated weekday name, e.g. `"Mon"`.
pub fn abbr_day_name<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    dt.date_naive().format("%a").to_string()
}

/// Full month name, e.g. `"January"`.
pub fn month_name<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    dt.date_naive().format("%B").to_string()
}

/// Abbreviated month name, e.g. `"Jan"`.
pub fn abbr_month_name<Tz: TimeZone>(dt: &DateTime<Tz>) -> String {
    dt.date_naive().format("%b").to_string()
}

/// Full name of a month number (1-12).
pub fn month_name_of(month: u32) -> Result<&'static str> {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .ok_or_else(|| TimeError::InvalidDate(format!("month {} is not in 1..=12", month)))
}

// ── Day counts ──────────────────────────────────────────────────────────────

/// Gregorian leap year: divisible by 4, and not by 100 unless also by 400.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// 366 for leap years, otherwise 365.
pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Number of days in `month` (1-12) of `year`.
///
/// # Errors
///
/// Returns [`TimeError::InvalidDate`] if `month` is outside 1-12 or the year
/// is outside chrono's range.
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    Ok(last_of_month(year, month)?.day())
}
