//! In-memory aggregation over record snapshots
//!
//! All calendar bucketing (months, weekdays, local dates, "today") happens in
//! the configured time zone; the rolling windows themselves are plain UTC
//! instants.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use straycare_domain::constants::{ALL_ZONES, WEEKDAY_LABELS, WEEKLY_ACTIVITY_DAYS};
use straycare_domain::{
    Adoption, DailyCount, MonthlyData, PeriodSummary, Report, Result, StrayCareError, Volunteer,
    WeeklyData, ZoneCounter, ZoneTable,
};

use super::window::TimeWindow;

/// Zone filter from the `zone` request parameter.
///
/// Matching is a case-insensitive exact comparison against the raw report
/// location. Absent or the literal `"all"` disables filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneFilter {
    All,
    Zone(String),
}

impl ZoneFilter {
    pub fn parse(zone: Option<&str>) -> Self {
        match zone {
            None | Some(ALL_ZONES) => Self::All,
            Some(zone) => Self::Zone(zone.to_lowercase()),
        }
    }

    pub fn matches(&self, location: &str) -> bool {
        match self {
            Self::All => true,
            Self::Zone(zone) => location.to_lowercase() == *zone,
        }
    }
}

/// Period-over-period growth in percent.
///
/// A previous count of zero yields 100 when anything happened this period
/// and 0 otherwise.
pub fn growth_percentage(current: usize, previous: usize) -> f64 {
    if previous == 0 {
        return if current > 0 { 100.0 } else { 0.0 };
    }

    (current as f64 - previous as f64) / previous as f64 * 100.0
}

/// Share of completed or rescued reports, floored to a whole percent.
/// Zero for an empty set.
pub fn success_rate<'a>(reports: impl IntoIterator<Item = &'a Report>) -> u32 {
    let (total, successful) = reports.into_iter().fold((0_usize, 0_usize), |(total, ok), r| {
        (total + 1, ok + usize::from(r.is_successful()))
    });

    if total == 0 {
        return 0;
    }

    u32::try_from(successful * 100 / total).unwrap_or(100)
}

/// Number of distinct raw location strings.
pub fn active_zones<'a>(reports: impl IntoIterator<Item = &'a Report>) -> usize {
    reports.into_iter().map(|r| r.location.as_str()).collect::<BTreeSet<_>>().len()
}

/// Counters for one window. Reports are expected to be pre-filtered by zone;
/// adoptions and volunteers are only filtered by time.
pub fn period_summary(
    reports: &[&Report],
    adoptions: &[Adoption],
    volunteers: &[Volunteer],
    window: &TimeWindow,
) -> PeriodSummary {
    PeriodSummary {
        reports: reports.len(),
        rescued: reports.iter().filter(|r| r.is_under_care()).count(),
        adopted: adoptions.iter().filter(|a| window.contains(a.created_at)).count(),
        volunteers: volunteers.iter().filter(|v| window.contains(v.created_at)).count(),
    }
}

/// Start of the local calendar day containing `now`, as a UTC instant.
pub fn local_midnight(now: DateTime<Utc>, tz: Tz) -> DateTime<Utc> {
    local_day_start(now.with_timezone(&tz).date_naive(), tz)
}

fn local_day_start(date: NaiveDate, tz: Tz) -> DateTime<Utc> {
    let naive = date.and_time(NaiveTime::MIN);
    // Midnight can fall into a DST gap; read the wall time as UTC then.
    tz.from_local_datetime(&naive)
        .earliest()
        .unwrap_or_else(|| tz.from_utc_datetime(&naive))
        .with_timezone(&Utc)
}

/// First day of the month `back` months before (`year`, `month`).
fn month_back(year: i32, month: u32, back: u32) -> Result<NaiveDate> {
    let index = i64::from(year) * 12 + i64::from(month) - 1 - i64::from(back);
    let out_of_range = || StrayCareError::Internal(format!("month offset {back} out of range"));

    let year = i32::try_from(index.div_euclid(12)).map_err(|_| out_of_range())?;
    let month = u32::try_from(index.rem_euclid(12) + 1).map_err(|_| out_of_range())?;
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(out_of_range)
}

/// Trailing `months` calendar months ending with the current one, oldest
/// first.
///
/// Each bucket counts reports, reports under care, and adoptions created in
/// `[month_start, next_month_start)`.
pub fn monthly_progress(
    reports: &[Report],
    adoptions: &[Adoption],
    months: u32,
    now: DateTime<Utc>,
    tz: Tz,
) -> Result<Vec<MonthlyData>> {
    let today = now.with_timezone(&tz).date_naive();
    let (year, month) = (today.year(), today.month());

    let mut series = Vec::new();
    for back in (0..months).rev() {
        let first = month_back(year, month, back)?;
        let next = first
            .checked_add_months(chrono::Months::new(1))
            .ok_or_else(|| StrayCareError::Internal("month end out of range".into()))?;
        let window = TimeWindow::between(local_day_start(first, tz), local_day_start(next, tz));

        let in_month: Vec<&Report> =
            reports.iter().filter(|r| window.contains(r.created_at)).collect();

        series.push(MonthlyData {
            month: first.format("%b").to_string(),
            reports: in_month.len(),
            rescued: in_month.iter().filter(|r| r.is_under_care()).count(),
            adopted: adoptions.iter().filter(|a| window.contains(a.created_at)).count(),
        });
    }

    Ok(series)
}

/// Seven Mon..Sun buckets counting reports from the trailing seven days by
/// local weekday. Rolling, not the calendar week.
pub fn weekly_activity(reports: &[Report], now: DateTime<Utc>, tz: Tz) -> Vec<WeeklyData> {
    let since = now - Duration::days(WEEKLY_ACTIVITY_DAYS);
    let mut counts = [0_usize; 7];

    for report in reports.iter().filter(|r| r.created_at >= since) {
        let weekday = report.created_at.with_timezone(&tz).weekday();
        counts[weekday.num_days_from_monday() as usize] += 1;
    }

    WEEKDAY_LABELS
        .iter()
        .zip(counts)
        .map(|(day, value)| WeeklyData { day: (*day).to_string(), value })
        .collect()
}

/// Report count per raw location.
pub fn zone_distribution(reports: &[Report]) -> BTreeMap<String, usize> {
    let mut distribution = BTreeMap::new();
    for report in reports {
        *distribution.entry(report.location.clone()).or_insert(0) += 1;
    }
    distribution
}

/// Report count per upper-case status label; missing status is `PENDING`.
pub fn status_breakdown(reports: &[Report]) -> BTreeMap<String, usize> {
    let mut breakdown = BTreeMap::new();
    for report in reports {
        *breakdown.entry(report.status_label().to_string()).or_insert(0) += 1;
    }
    breakdown
}

pub fn zone_table(reports: &[Report]) -> ZoneTable {
    let mut zones: BTreeMap<String, ZoneCounter> = BTreeMap::new();
    for report in reports {
        let counter = zones.entry(report.location.clone()).or_default();
        counter.total += 1;
        if report.is_under_care() {
            counter.rescued += 1;
        }
    }

    let total_zones = zones.len();
    ZoneTable { zones, total_zones }
}

/// Reports created at or after `since`, grouped by local date, ascending.
/// Dates without reports are omitted.
pub fn daily_counts(reports: &[Report], since: DateTime<Utc>, tz: Tz) -> Vec<DailyCount> {
    let mut by_date: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for report in reports.iter().filter(|r| r.created_at >= since) {
        *by_date.entry(report.created_at.with_timezone(&tz).date_naive()).or_insert(0) += 1;
    }

    by_date.into_iter().map(|(date, count)| DailyCount { date, count }).collect()
}
