//! `railtime` CLI: durations, calendar boundaries, and humanized distances.
//!
//! ## Usage
//!
//! ```sh
//! # Seconds in a duration
//! railtime seconds 3 weeks
//!
//! # Instants relative to now, or to an explicit reference
//! railtime ago 5 minutes
//! railtime from-now 2 days --at 2026-03-01T12:00:00Z --tz UTC
//!
//! # Humanized distance ("about 2 hours"), optionally with direction
//! railtime distance 2026-03-01T10:00:00Z 2026-03-01T12:00:00Z
//! railtime distance 2026-03-01T10:00:00Z --relative
//!
//! # Calendar boundaries, with a Sunday week start
//! railtime --week-start sunday boundary beginning-of-week
//!
//! # Formatting and calendar pass-throughs
//! railtime format "%A, %B %-d" --at 2026-02-18T14:00:00Z
//! railtime fields --json
//! railtime days-in-month 2024 2
//! railtime zone America/New_York
//! ```

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use clap::{ArgAction, Parser, Subcommand};
use log::{debug, LevelFilter};
use railtime::calendar::{day_name, month_name};
use railtime::format::TimeFields;
use railtime::zone::{current_zone, current_zone_name, find_zone, parse_in_zone, utc_offset};
use railtime::{
    days_in_month, days_in_year, direction_between, distance_between, elapsed_seconds,
    relative_in_words, to_formatted_string, Boundary, CalendarOptions, Duration, Unit, WeekStart,
};

#[derive(Parser)]
#[command(
    name = "railtime",
    version,
    about = "Rails-style date helpers: durations, boundaries, and humanized distances"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// IANA timezone for reading and printing instants (defaults to the host zone)
    #[arg(long, global = true, env = "RAILTIME_TZ")]
    tz: Option<String>,

    /// First day of the week for week boundaries
    #[arg(long, global = true, env = "RAILTIME_WEEK_START", default_value = "monday")]
    week_start: WeekStart,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the number of seconds in a duration
    Seconds {
        #[arg(allow_hyphen_values = true)]
        magnitude: i64,
        /// minute, hour, day, week, month, decade, or leapyear (singular or plural)
        unit: Unit,
    },
    /// Print the instant a duration before the reference
    Ago {
        #[arg(allow_hyphen_values = true)]
        magnitude: i64,
        unit: Unit,
        /// Reference instant (RFC 3339, or local YYYY-MM-DDTHH:MM:SS); defaults to now
        #[arg(long)]
        at: Option<String>,
    },
    /// Print the instant a duration after the reference
    FromNow {
        #[arg(allow_hyphen_values = true)]
        magnitude: i64,
        unit: Unit,
        /// Reference instant (RFC 3339, or local YYYY-MM-DDTHH:MM:SS); defaults to now
        #[arg(long)]
        at: Option<String>,
    },
    /// Humanize the distance between two instants
    Distance {
        from: String,
        /// Defaults to now
        to: Option<String>,
        /// Add "ago" / "in" depending on direction
        #[arg(long)]
        relative: bool,
        /// Print the bucket and direction as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a calendar boundary (e.g. beginning-of-week, end-of-month)
    Boundary {
        kind: Boundary,
        #[arg(long)]
        at: Option<String>,
    },
    /// Print the number of days in a month
    DaysInMonth { year: i32, month: u32 },
    /// Print the number of days in a year
    DaysInYear { year: i32 },
    /// Render an instant with a strftime pattern
    Format {
        pattern: String,
        #[arg(long)]
        at: Option<String>,
    },
    /// Print [year, month, day, hour, minute, second, weekday] (Monday = 0)
    Fields {
        #[arg(long)]
        at: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Print the weekday and month names of an instant
    Names {
        #[arg(long)]
        at: Option<String>,
    },
    /// Print a zone name and its current UTC offset (the host zone if omitted)
    Zone { name: Option<String> },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = CalendarOptions {
        week_start: cli.week_start,
        zone: cli.tz.clone(),
    };
    // Only commands that read or print instants need a zone.
    let zone = || resolve_zone(&options);

    match cli.command {
        Commands::Seconds { magnitude, unit } => {
            println!("{}", Duration::new(magnitude, unit).to_seconds());
        }
        Commands::Ago { magnitude, unit, at } => {
            let tz = zone()?;
            let reference = reference_instant(at.as_deref(), &tz)?;
            let d = Duration::new(magnitude, unit);
            let result = d
                .before(&reference)
                .with_context(|| format!("Failed to compute {} ago", d))?;
            println!("{}", result.to_rfc3339());
        }
        Commands::FromNow { magnitude, unit, at } => {
            let tz = zone()?;
            let reference = reference_instant(at.as_deref(), &tz)?;
            let d = Duration::new(magnitude, unit);
            let result = d
                .after(&reference)
                .with_context(|| format!("Failed to compute {} from now", d))?;
            println!("{}", result.to_rfc3339());
        }
        Commands::Distance {
            from,
            to,
            relative,
            json,
        } => {
            let tz = zone()?;
            let from = parse_instant(&from, &tz)?;
            let to = reference_instant(to.as_deref(), &tz)?;
            let distance = distance_between(&from, &to);
            let words = if relative {
                relative_in_words(&from, &to)
            } else {
                distance.to_string()
            };

            if json {
                let value = serde_json::json!({
                    "words": words,
                    "distance": distance,
                    "direction": direction_between(&from, &to),
                    "elapsed_seconds": elapsed_seconds(&from, &to).abs(),
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("{}", words);
            }
        }
        Commands::Boundary { kind, at } => {
            let tz = zone()?;
            let reference = reference_instant(at.as_deref(), &tz)?;
            let result = kind
                .apply(&reference, &options)
                .with_context(|| format!("Failed to compute {}", kind))?;
            println!("{}", result.to_rfc3339());
        }
        Commands::DaysInMonth { year, month } => {
            println!("{}", days_in_month(year, month)?);
        }
        Commands::DaysInYear { year } => {
            println!("{}", days_in_year(year));
        }
        Commands::Format { pattern, at } => {
            let tz = zone()?;
            let reference = reference_instant(at.as_deref(), &tz)?;
            println!("{}", to_formatted_string(&reference, &pattern)?);
        }
        Commands::Fields { at, json } => {
            let tz = zone()?;
            let reference = reference_instant(at.as_deref(), &tz)?;
            let fields = TimeFields::of(&reference);
            if json {
                println!("{}", serde_json::to_string(&fields)?);
            } else {
                println!("{:?}", fields.to_array());
            }
        }
        Commands::Names { at } => {
            let tz = zone()?;
            let reference = reference_instant(at.as_deref(), &tz)?;
            println!("{} {}", day_name(&reference), month_name(&reference));
        }
        Commands::Zone { name } => {
            let tz = match name {
                Some(name) => find_zone(&name)?,
                None => zone()?,
            };
            let now = Utc::now().with_timezone(&tz);
            println!("{} {}", tz.name(), utc_offset(&now));
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// The zone from `--tz` / `RAILTIME_TZ`, or the host zone.
fn resolve_zone(options: &CalendarOptions) -> Result<Tz> {
    let tz = match &options.zone {
        Some(name) => find_zone(name).with_context(|| format!("Failed to load zone: {}", name))?,
        None => {
            debug!("no zone configured, host reports {}", current_zone_name());
            current_zone()
        }
    };
    debug!("using zone {} with week start {}", tz.name(), options.week_start);
    Ok(tz)
}

fn parse_instant(s: &str, tz: &Tz) -> Result<DateTime<Tz>> {
    parse_in_zone(s, tz).with_context(|| format!("Failed to parse instant: {}", s))
}

fn reference_instant(at: Option<&str>, tz: &Tz) -> Result<DateTime<Tz>> {
    match at {
        Some(s) => parse_instant(s, tz),
        None => Ok(Utc::now().with_timezone(tz)),
    }
}
