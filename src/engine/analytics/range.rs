use chrono::{DateTime, LocalResult, Months, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::engine::errors::LedgerError;
use crate::shared::config::CONFIG;

/// Years the calendar math accepts; anything else is a caller error.
const YEAR_MIN: i32 = 1970;
const YEAR_MAX: i32 = 9999;

pub fn validate_year(year: i32) -> Result<(), LedgerError> {
    if (YEAR_MIN..=YEAR_MAX).contains(&year) {
        Ok(())
    } else {
        Err(LedgerError::invalid_query(
            "year",
            format!("must be between {YEAR_MIN} and {YEAR_MAX}, got {year}"),
        ))
    }
}

pub fn validate_month(month: u32) -> Result<(), LedgerError> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(LedgerError::invalid_query(
            "month",
            format!("must be between 1 and 12, got {month}"),
        ))
    }
}

/// `[Y-01-01T00:00:00.000, Y-12-31T23:59:59.999]` in the configured store
/// zone, as UTC instants. The upper bound is inclusive so the last
/// millisecond of the year is counted.
pub fn year_bounds(year: i32) -> Result<(DateTime<Utc>, DateTime<Utc>), LedgerError> {
    validate_year(year)?;
    let from = day_start(date(year, 1, 1)?)?;
    let to = day_end(date(year, 12, 31)?)?;
    Ok((from, to))
}

/// First millisecond of the month through the last millisecond of its
/// real final day (leap Februaries included), in the configured zone.
pub fn month_bounds(year: i32, month: u32) -> Result<(DateTime<Utc>, DateTime<Utc>), LedgerError> {
    validate_year(year)?;
    validate_month(month)?;
    let first = date(year, month, 1)?;
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|d| d.pred_opt())
        .ok_or_else(|| LedgerError::invalid_query("month", "month end out of range"))?;
    Ok((day_start(first)?, day_end(last)?))
}

/// Year bounds, narrowed to one month when given.
pub fn bounds(year: i32, month: Option<u32>) -> Result<(DateTime<Utc>, DateTime<Utc>), LedgerError> {
    match month {
        Some(m) => month_bounds(year, m),
        None => year_bounds(year),
    }
}

fn date(year: i32, month: u32, day: u32) -> Result<NaiveDate, LedgerError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| LedgerError::invalid_query("year", format!("invalid date {year}-{month}-{day}")))
}

fn day_start(day: NaiveDate) -> Result<DateTime<Utc>, LedgerError> {
    local_instant(day.and_hms_opt(0, 0, 0).ok_or_else(bad_clock)?)
}

fn day_end(day: NaiveDate) -> Result<DateTime<Utc>, LedgerError> {
    local_instant(day.and_hms_milli_opt(23, 59, 59, 999).ok_or_else(bad_clock)?)
}

fn bad_clock() -> LedgerError {
    LedgerError::invalid_query("year", "clock component out of range")
}

fn local_instant(naive: NaiveDateTime) -> Result<DateTime<Utc>, LedgerError> {
    let zone = CONFIG.time.zone();
    let instant = match zone.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        // DST fold: take the earlier reading
        LocalResult::Ambiguous(earlier, _) => earlier.with_timezone(&Utc),
        // DST gap: fall back to the UTC reading of the wall clock
        LocalResult::None => Utc.from_utc_datetime(&naive),
    };
    Ok(instant)
}
