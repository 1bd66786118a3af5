//! # railtime
//!
//! Rails-style date helpers over chrono.
//!
//! Build fixed-length durations ("5 minutes"), apply them to instants
//! ("5 minutes ago"), compute calendar boundaries ("beginning of week") and
//! humanize the distance between two instants ("about 2 hours").
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use railtime::{distance_in_words, DurationExt};
//!
//! let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
//! let then = 150_i64.minutes().before(&now).unwrap();
//! assert_eq!(distance_in_words(&then, &now), "about 3 hours");
//! ```
//!
//! All functions take the reference instant explicitly; only
//! [`Duration::ago`], [`Duration::from_now`], [`time_ago_in_words`] and
//! [`zone::current_zone_name`] read process state.
//!
//! ## Modules
//!
//! - [`duration`]: `(magnitude, unit)` spans, `ago` / `from_now`
//! - [`humanize`]: bucketed distance-of-time phrases
//! - [`calendar`]: day/week/month/quarter/year boundaries, names, day counts
//! - [`format`]: strftime, ISO date, epoch seconds, field arrays
//! - [`zone`]: host zone name, IANA lookup, conversion
//! - [`config`]: week start and default zone options
//! - [`error`]: Error types

pub mod calendar;
pub mod config;
pub mod duration;
pub mod error;
pub mod format;
pub mod humanize;
pub mod zone;

pub use calendar::{days_in_month, days_in_year, is_leap_year, Boundary};
pub use config::{CalendarOptions, WeekStart};
pub use duration::{duration, Duration, DurationExt, Unit};
pub use error::TimeError;
pub use format::{to_epoch_seconds, to_field_array, to_formatted_string, to_iso_date, TimeFields};
pub use humanize::{
    direction_between, distance_between, distance_in_words, distance_of_seconds, elapsed_seconds,
    relative_in_words, time_ago_in_words, Direction, Distance,
};
