//! Time window resolution
//!
//! Period tokens select rolling day spans counted back from "now"; they are
//! not aligned to calendar weeks, months or years.

use chrono::{DateTime, Duration, Utc};
use straycare_domain::constants::{MONTH_SPAN_DAYS, WEEK_SPAN_DAYS, YEAR_SPAN_DAYS};

/// Aggregation period selected by the `timeRange` token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Period {
    /// Trailing 7 days
    Week,
    /// Trailing 30 days
    #[default]
    Month,
    /// Trailing 365 days
    Year,
}

impl Period {
    /// Unknown or absent tokens fall back to [`Period::Month`].
    pub fn parse(token: Option<&str>) -> Self {
        match token {
            Some("week") => Self::Week,
            Some("year") => Self::Year,
            _ => Self::Month,
        }
    }

    /// Length of one window in days.
    pub const fn span_days(self) -> i64 {
        match self {
            Self::Week => WEEK_SPAN_DAYS,
            Self::Month => MONTH_SPAN_DAYS,
            Self::Year => YEAR_SPAN_DAYS,
        }
    }
}

/// Range of instants `[start, end)`; an open window has no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    /// Inclusive lower bound
    pub start: DateTime<Utc>,
    /// Exclusive upper bound, `None` when open
    pub end: Option<DateTime<Utc>>,
}

impl TimeWindow {
    /// Everything at or after `start`.
    pub const fn since(start: DateTime<Utc>) -> Self {
        Self { start, end: None }
    }

    /// Instants from `start` up to, not including, `end`.
    pub const fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end: Some(end) }
    }

    /// Whether `at` falls inside the window.
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        at >= self.start && self.end.map_or(true, |end| at < end)
    }
}

/// Current window and the equal-length window immediately before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodWindows {
    /// Window ending now, open above
    pub current: TimeWindow,
    /// Window of the same length immediately before `current`
    pub previous: TimeWindow,
    /// Length of each window in days
    pub span_days: i64,
}

impl PeriodWindows {
    /// `current` is `[now - span, ..)` and `previous` is
    /// `[now - 2*span, now - span)`.
    pub fn resolve(period: Period, now: DateTime<Utc>) -> Self {
        let span_days = period.span_days();
        let span = Duration::days(span_days);
        let current_start = now - span;

        Self {
            current: TimeWindow::since(current_start),
            previous: TimeWindow::between(current_start - span, current_start),
            span_days,
        }
    }
}

/// Range token of the daily report series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DailyRange {
    /// Trailing week, the default
    #[default]
    SevenDays,
    /// Trailing thirty days
    ThirtyDays,
}

impl DailyRange {
    /// `"30days"` selects thirty days; anything else is seven.
    pub fn parse(token: Option<&str>) -> Self {
        match token {
            Some("30days") => Self::ThirtyDays,
            _ => Self::SevenDays,
        }
    }

    /// Number of trailing days covered.
    pub const fn days(self) -> i64 {
        match self {
            Self::SevenDays => WEEK_SPAN_DAYS,
            Self::ThirtyDays => MONTH_SPAN_DAYS,
        }
    }
}
