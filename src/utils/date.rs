//! Epoch-second helpers for the CLI surface.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDateTime};

pub fn now() -> i64 {
    Local::now().timestamp()
}

/// Parse `"YYYY-MM-DD HH:MM"` in local time into epoch seconds.
pub fn parse_datetime(s: &str) -> AppResult<i64> {
    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M")
        .map_err(|_| AppError::InvalidDate(s.to_string()))?;

    naive
        .and_local_timezone(Local)
        .single()
        .map(|dt| dt.timestamp())
        .ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// Whether two epoch timestamps fall on the same local calendar day.
pub fn same_local_day(a: i64, b: i64) -> bool {
    let day = |ts: i64| {
        DateTime::from_timestamp(ts, 0).map(|dt| dt.with_timezone(&Local).date_naive())
    };
    match (day(a), day(b)) {
        (Some(da), Some(db)) => da == db,
        _ => false,
    }
}
