//! Perihelion-passage time conversion
//!
//! MPC records state the perihelion passage as a calendar year, month and a
//! fractional day. The importer persists that instant as a Julian Day Number
//! in UTC. Conversion truncates to whole seconds, matching the precision the
//! one-line format itself carries.

use chrono::{DateTime, NaiveDate, Utc};

use crate::constants::{JD_UNIX_EPOCH, SECONDS_PER_DAY};

/// Split a fractional day into calendar day and time-of-day components
///
/// The integer part is the calendar day. The fraction maps onto seconds of
/// the day and is decomposed by successive division, so any fraction in
/// `[0, 1)` yields in-range hours, minutes and seconds.
pub fn split_day_fraction(day_fraction: f64) -> (u32, u32, u32, u32) {
    let day = day_fraction.trunc() as u32;

    let mut remainder = ((day_fraction - day as f64) * SECONDS_PER_DAY) as u32;
    let seconds = remainder % 60;
    remainder /= 60;
    let minutes = remainder % 60;
    remainder /= 60;
    let hours = remainder % 24;

    (day, hours, minutes, seconds)
}

/// Build the UTC perihelion-passage instant from record fields
///
/// Returns `None` when the fields do not form a valid civil date, e.g.
/// month 13, day 0, or February 30.
pub fn perihelion_passage_utc(year: i32, month: u32, day_fraction: f64) -> Option<DateTime<Utc>> {
    let (day, hours, minutes, seconds) = split_day_fraction(day_fraction);

    Some(
        NaiveDate::from_ymd_opt(year, month, day)?
            .and_hms_opt(hours, minutes, seconds)?
            .and_utc(),
    )
}

/// Julian Day Number of a UTC instant
///
/// Computed through the Unix epoch, which sits at JD 2440587.5 on the
/// proleptic Gregorian calendar chrono uses.
pub fn julian_day(instant: DateTime<Utc>) -> f64 {
    instant.timestamp() as f64 / SECONDS_PER_DAY + JD_UNIX_EPOCH
}
