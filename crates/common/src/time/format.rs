//! Human-readable relative time formatting
//!
//! Produces the "5 min ago" style strings shown next to activity feed items.

use chrono::{DateTime, Utc};

const MINUTES_PER_HOUR: i64 = 60;
const HOURS_PER_DAY: i64 = 24;
const DAYS_PER_MONTH: i64 = 30;

/// Format the distance between `then` and `now`.
///
/// Buckets: under a minute is `"Just now"`, then minutes, hours, days, and
/// finally 30-day months. Units are pluralised only when the count exceeds
/// one. Instants in the future read as `"Just now"`.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, TimeZone, Utc};
/// use straycare_common::time::format::format_time_ago;
///
/// let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
/// assert_eq!(format_time_ago(now - Duration::seconds(30), now), "Just now");
/// assert_eq!(format_time_ago(now - Duration::hours(1), now), "1 hour ago");
/// assert_eq!(format_time_ago(now - Duration::days(3), now), "3 days ago");
/// ```
pub fn format_time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = now.signed_duration_since(then).num_minutes();

    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < MINUTES_PER_HOUR {
        return format!("{minutes} min ago");
    }

    let hours = minutes / MINUTES_PER_HOUR;
    if hours < HOURS_PER_DAY {
        return format!("{hours} hour{} ago", plural(hours));
    }

    let days = hours / HOURS_PER_DAY;
    if days < DAYS_PER_MONTH {
        return format!("{days} day{} ago", plural(days));
    }

    let months = days / DAYS_PER_MONTH;
    format!("{months} month{} ago", plural(months))
}

const fn plural(n: i64) -> &'static str {
    if n > 1 {
        "s"
    } else {
        ""
    }
}
