//! Timezone pass-throughs: host zone name, IANA lookup, conversion.

use chrono::{DateTime, NaiveDateTime, Offset, TimeZone};
use chrono_tz::Tz;
use log::{debug, warn};

use crate::error::{Result, TimeError};

/// IANA name of the host's zone, or `"UTC"` if the platform cannot report one.
pub fn current_zone_name() -> String {
    match iana_time_zone::get_timezone() {
        Ok(name) => name,
        Err(e) => {
            warn!("cannot determine host timezone, using UTC: {}", e);
            "UTC".to_string()
        }
    }
}

/// Look up an IANA zone by name.
///
/// # Errors
///
/// Returns [`TimeError::InvalidTimezone`] if the name is not in the tz database.
pub fn find_zone(name: &str) -> Result<Tz> {
    let tz = name
        .trim()
        .parse::<Tz>()
        .map_err(|_| TimeError::InvalidTimezone(format!("'{}'", name)))?;
    debug!("resolved zone '{}'", tz.name());
    Ok(tz)
}

/// Look up `name`, falling back to UTC with a warning when it is unknown.
pub fn find_zone_or_utc(name: &str) -> Tz {
    find_zone(name).unwrap_or_else(|e| {
        warn!("{}, using UTC", e);
        Tz::UTC
    })
}

/// The host zone as a chrono-tz [`Tz`], falling back to UTC.
pub fn current_zone() -> Tz {
    find_zone_or_utc(&current_zone_name())
}

/// The same instant expressed in the named zone.
pub fn in_zone<T: TimeZone>(dt: &DateTime<T>, name: &str) -> Result<DateTime<Tz>> {
    Ok(dt.with_timezone(&find_zone(name)?))
}

/// UTC offset of `dt`, e.g. `"-05:00"` or `"+09:00"`.
pub fn utc_offset<T: TimeZone>(dt: &DateTime<T>) -> String {
    let offset_secs = dt.offset().fix().local_minus_utc();
    let sign = if offset_secs >= 0 { "+" } else { "-" };
    let abs_secs = offset_secs.unsigned_abs();
    let hours = abs_secs / 3600;
    let minutes = (abs_secs % 3600) / 60;
    format!("{sign}{hours:02}:{minutes:02}")
}

/// Parse a datetime string into `tz`.
///
/// RFC 3339 strings keep their instant and are converted into `tz`; naive
/// `YYYY-MM-DDTHH:MM:SS` strings are read as wall-clock time in `tz`.
///
/// # Errors
///
/// Returns [`TimeError::InvalidDatetime`] if the string matches neither form,
/// or names a local time that does not exist in `tz`.
pub fn parse_in_zone(s: &str, tz: &Tz) -> Result<DateTime<Tz>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(tz));
    }
    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map_err(|e| TimeError::InvalidDatetime(format!("'{}': {}", s, e)))?;
    tz.from_local_datetime(&naive).earliest().ok_or_else(|| {
        TimeError::InvalidDatetime(format!("'{}' does not exist in {}", s, tz.name()))
    })
}
