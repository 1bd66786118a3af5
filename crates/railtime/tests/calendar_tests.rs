//! Tests for calendar boundaries, names, and day counts.

use chrono::{DateTime, TimeZone, Timelike, Utc};
use chrono_tz::America::New_York;
use railtime::calendar::{
    abbr_day_name, abbr_month_name, beginning_of_day, beginning_of_month, beginning_of_quarter,
    beginning_of_week, beginning_of_year, day_name, end_of_day, end_of_month, end_of_quarter,
    end_of_week, end_of_year, month_name, month_name_of, tomorrow, yesterday,
};
use railtime::{
    days_in_month, days_in_year, is_leap_year, Boundary, CalendarOptions, TimeError, WeekStart,
};

fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
        .unwrap()
}

/// Wednesday, 2026-02-18 14:35:20 UTC.
fn wednesday() -> DateTime<Utc> {
    at(2026, 2, 18, 14, 35, 20)
}

// ─────────────────────────────────────────────────────────────────────────────
// Day
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn day_boundaries() {
    assert_eq!(beginning_of_day(&wednesday()).unwrap(), at(2026, 2, 18, 0, 0, 0));
    assert_eq!(end_of_day(&wednesday()).unwrap(), at(2026, 2, 18, 23, 59, 59));
}

#[test]
fn day_boundaries_use_local_wall_clock() {
    // 03:00 UTC on Feb 18 is still Feb 17 in New York.
    let dt = at(2026, 2, 18, 3, 0, 0).with_timezone(&New_York);
    let start = beginning_of_day(&dt).unwrap();
    assert_eq!(start, New_York.with_ymd_and_hms(2026, 2, 17, 0, 0, 0).unwrap());
    assert_eq!(start.with_timezone(&Utc), at(2026, 2, 17, 5, 0, 0));
}

#[test]
fn yesterday_and_tomorrow_keep_wall_time() {
    assert_eq!(yesterday(&wednesday()).unwrap(), at(2026, 2, 17, 14, 35, 20));
    assert_eq!(tomorrow(&wednesday()).unwrap(), at(2026, 2, 19, 14, 35, 20));
    assert_eq!(tomorrow(&at(2024, 2, 28, 9, 0, 0)).unwrap(), at(2024, 2, 29, 9, 0, 0));
}

#[test]
fn tomorrow_across_spring_forward_keeps_local_time() {
    // DST starts 2026-03-08 in New York; 09:00 local stays 09:00 local.
    let sat = New_York.with_ymd_and_hms(2026, 3, 7, 9, 0, 0).unwrap();
    let sun = tomorrow(&sat).unwrap();
    assert_eq!(sun.hour(), 9);
    assert_eq!((sun - sat).num_hours(), 23);
}

#[test]
fn nonexistent_local_time_is_an_error() {
    // 02:30 on 2026-03-08 does not exist in New York.
    let sat = New_York.with_ymd_and_hms(2026, 3, 7, 2, 30, 0).unwrap();
    let err = tomorrow(&sat).unwrap_err();
    assert!(matches!(err, TimeError::InvalidDate(_)));
}

// ─────────────────────────────────────────────────────────────────────────────
// Week
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn week_runs_monday_to_sunday_by_default() {
    let start = beginning_of_week(&wednesday(), WeekStart::default()).unwrap();
    let end = end_of_week(&wednesday(), WeekStart::default()).unwrap();
    assert_eq!(start, at(2026, 2, 16, 0, 0, 0));
    assert_eq!(end, at(2026, 2, 22, 23, 59, 59));
    assert_eq!(day_name(&start), "Monday");
    assert_eq!(day_name(&end), "Sunday");
}

#[test]
fn sunday_week_start() {
    let start = beginning_of_week(&wednesday(), WeekStart::Sunday).unwrap();
    let end = end_of_week(&wednesday(), WeekStart::Sunday).unwrap();
    assert_eq!(start, at(2026, 2, 15, 0, 0, 0));
    assert_eq!(end, at(2026, 2, 21, 23, 59, 59));
}

#[test]
fn monday_is_its_own_week_start() {
    let monday = at(2026, 2, 16, 8, 0, 0);
    assert_eq!(
        beginning_of_week(&monday, WeekStart::Monday).unwrap(),
        at(2026, 2, 16, 0, 0, 0)
    );
}

#[test]
fn sunday_ends_a_monday_week() {
    let sunday = at(2026, 2, 22, 20, 0, 0);
    assert_eq!(
        beginning_of_week(&sunday, WeekStart::Monday).unwrap(),
        at(2026, 2, 16, 0, 0, 0)
    );
    assert_eq!(
        beginning_of_week(&sunday, WeekStart::Sunday).unwrap(),
        at(2026, 2, 22, 0, 0, 0)
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Month, quarter, year
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn month_boundaries() {
    assert_eq!(beginning_of_month(&wednesday()).unwrap(), at(2026, 2, 1, 0, 0, 0));
    assert_eq!(end_of_month(&wednesday()).unwrap(), at(2026, 2, 28, 23, 59, 59));
}

#[test]
fn end_of_month_in_leap_february() {
    assert_eq!(
        end_of_month(&at(2024, 2, 10, 0, 0, 0)).unwrap(),
        at(2024, 2, 29, 23, 59, 59)
    );
}

#[test]
fn end_of_december() {
    assert_eq!(
        end_of_month(&at(2026, 12, 5, 0, 0, 0)).unwrap(),
        at(2026, 12, 31, 23, 59, 59)
    );
}

#[test]
fn quarter_boundaries() {
    let aug = at(2026, 8, 14, 10, 0, 0);
    assert_eq!(beginning_of_quarter(&aug).unwrap(), at(2026, 7, 1, 0, 0, 0));
    assert_eq!(end_of_quarter(&aug).unwrap(), at(2026, 9, 30, 23, 59, 59));

    let nov = at(2026, 11, 1, 0, 0, 0);
    assert_eq!(end_of_quarter(&nov).unwrap(), at(2026, 12, 31, 23, 59, 59));
}

#[test]
fn year_boundaries() {
    assert_eq!(beginning_of_year(&wednesday()).unwrap(), at(2026, 1, 1, 0, 0, 0));
    assert_eq!(end_of_year(&wednesday()).unwrap(), at(2026, 12, 31, 23, 59, 59));
}

#[test]
fn boundary_dispatch_matches_direct_calls() {
    let sunday_opts = CalendarOptions::new().with_week_start(WeekStart::Sunday);
    assert_eq!(
        Boundary::BeginningOfWeek.apply(&wednesday(), &sunday_opts).unwrap(),
        beginning_of_week(&wednesday(), WeekStart::Sunday).unwrap()
    );
    assert_eq!(
        Boundary::EndOfMonth.apply(&wednesday(), &CalendarOptions::default()).unwrap(),
        end_of_month(&wednesday()).unwrap()
    );
}

#[test]
fn boundary_names_parse() {
    assert_eq!("beginning_of_week".parse::<Boundary>().unwrap(), Boundary::BeginningOfWeek);
    assert_eq!("end-of-month".parse::<Boundary>().unwrap(), Boundary::EndOfMonth);
    assert_eq!("start-of-year".parse::<Boundary>().unwrap(), Boundary::BeginningOfYear);
    assert!(matches!(
        "middle-of-week".parse::<Boundary>(),
        Err(TimeError::InvalidOption(_))
    ));
    for b in Boundary::ALL {
        assert_eq!(b.to_string().parse::<Boundary>().unwrap(), b);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Names
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn day_and_month_names() {
    assert_eq!(day_name(&wednesday()), "Wednesday");
    assert_eq!(abbr_day_name(&wednesday()), "Wed");
    assert_eq!(month_name(&wednesday()), "February");
    assert_eq!(abbr_month_name(&wednesday()), "Feb");
}

#[test]
fn month_name_by_number() {
    assert_eq!(month_name_of(1).unwrap(), "January");
    assert_eq!(month_name_of(12).unwrap(), "December");
    assert!(matches!(month_name_of(13), Err(TimeError::InvalidDate(_))));
    assert!(month_name_of(0).is_err());
}

// ─────────────────────────────────────────────────────────────────────────────
// Day counts
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn leap_year_rule() {
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(2023));
    assert!(!is_leap_year(1900));
    assert!(is_leap_year(2000));
}

#[test]
fn days_in_year_counts() {
    assert_eq!(days_in_year(2023), 365);
    assert_eq!(days_in_year(2024), 366);
    assert_eq!(days_in_year(2100), 365);
    assert_eq!(days_in_year(2000), 366);
}

#[test]
fn days_in_month_counts() {
    assert_eq!(days_in_month(2023, 12).unwrap(), 31);
    assert_eq!(days_in_month(2024, 2).unwrap(), 29);
    assert_eq!(days_in_month(2023, 2).unwrap(), 28);
    assert_eq!(days_in_month(1900, 2).unwrap(), 28);
    assert_eq!(days_in_month(2026, 4).unwrap(), 30);
}

#[test]
fn days_in_month_rejects_bad_month() {
    assert!(matches!(days_in_month(2026, 0), Err(TimeError::InvalidDate(_))));
    assert!(matches!(days_in_month(2026, 13), Err(TimeError::InvalidDate(_))));
}

#[test]
fn month_lengths_sum_to_year_length() {
    for year in [1900, 2000, 2023, 2024] {
        let total: u32 = (1..=12).map(|m| days_in_month(year, m).unwrap()).sum();
        assert_eq!(total, days_in_year(year), "year {}", year);
    }
}
