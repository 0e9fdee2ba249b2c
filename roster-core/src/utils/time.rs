//! 时间工具函数 - hire date parsing and day arithmetic

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Parse an ISO-8601 hire date
///
/// Accepts `YYYY-MM-DD` (midnight UTC), RFC 3339 date-times, and naive
/// `YYYY-MM-DDTHH:MM:SS[.fff]` (read as UTC).
pub fn parse_hire_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Whole days between hire date and `now`, rounded to the nearest day
///
/// Exact halves round up (toward positive infinity), so a hire 12 hours in
/// the future is day 0. Negative for later future-dated hires; `None` when
/// the date does not parse.
pub fn days_since_hire(hire_date: &str, now: DateTime<Utc>) -> Option<i64> {
    let hired = parse_hire_date(hire_date)?;
    let days = (now - hired).num_milliseconds() as f64 / MILLIS_PER_DAY;
    Some((days + 0.5).floor() as i64)
}
