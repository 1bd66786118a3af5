//! Calendar options passed explicitly to boundary and zone helpers.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::TimeError;

/// Which day begins a week for week-boundary computations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekStart {
    /// ISO 8601 and Rails default (Monday through Sunday).
    #[default]
    Monday,
    /// US/Canada convention (Sunday through Saturday).
    Sunday,
}

impl WeekStart {
    /// How many days `weekday` is past the first day of the week.
    pub fn days_since_start(self, weekday: Weekday) -> i64 {
        match self {
            WeekStart::Monday => i64::from(weekday.num_days_from_monday()),
            WeekStart::Sunday => i64::from(weekday.num_days_from_sunday()),
        }
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekStart::Monday => f.write_str("monday"),
            WeekStart::Sunday => f.write_str("sunday"),
        }
    }
}

impl FromStr for WeekStart {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monday" | "mon" => Ok(WeekStart::Monday),
            "sunday" | "sun" => Ok(WeekStart::Sunday),
            other => Err(TimeError::InvalidOption(format!(
                "week start must be 'monday' or 'sunday', got '{}'",
                other
            ))),
        }
    }
}

/// Options shared by the calendar and zone helpers.
///
/// `zone` is an IANA name; `None` means the host zone reported by
/// [`crate::zone::current_zone_name`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarOptions {
    pub week_start: WeekStart,
    pub zone: Option<String>,
}

impl CalendarOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    pub fn with_zone(mut self, zone: impl Into<String>) -> Self {
        self.zone = Some(zone.into());
        self
    }

    /// The configured zone name, falling back to the host zone.
    pub fn zone_name(&self) -> String {
        self.zone
            .clone()
            .unwrap_or_else(crate::zone::current_zone_name)
    }
}
