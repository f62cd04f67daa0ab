//! Column encoding shared by the record repositories.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rusqlite::Row;

/// Unix seconds as stored in `created_at` columns.
pub(crate) fn to_unix(at: DateTime<Utc>) -> i64 {
    at.timestamp()
}

pub(crate) fn read_timestamp(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let secs: i64 = row.get(idx)?;
    DateTime::from_timestamp(secs, 0).ok_or(rusqlite::Error::IntegralValueOutOfRange(idx, secs))
}

/// Nullable enum column. Unrecognised text reads as `None`.
pub(crate) fn read_enum<T: FromStr>(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<T>> {
    let raw: Option<String> = row.get(idx)?;
    Ok(raw.and_then(|value| value.parse().ok()))
}

/// SQLite binds integers as i64.
pub(crate) fn sql_limit(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}
