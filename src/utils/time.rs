//! Time utilities: parsing HH:MM and combining it with a date.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn parse_required_time(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

/// Start/end on the session date; an end earlier than the start rolls over
/// to the next day (late-night sessions).
pub fn session_bounds(
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
    end_date: Option<NaiveDate>,
) -> (NaiveDateTime, NaiveDateTime) {
    let start_dt = date.and_time(start);
    let end_day = match end_date {
        Some(d) => d,
        None if end < start => date.succ_opt().unwrap_or(date),
        None => date,
    };
    (start_dt, end_day.and_time(end))
}
