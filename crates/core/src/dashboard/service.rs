//! Dashboard service - core business logic

use std::sync::Arc;

use chrono::Duration;
use chrono_tz::Tz;
use straycare_common::time::{Clock, SystemClock};
use straycare_domain::{
    ActivityFeed, ChartData, DailyCount, QuickStats, Report, Result, StatsBundle, VolunteerStatus,
    ZoneTable,
};
use tracing::debug;

use super::aggregation::{self, ZoneFilter};
use super::feed;
use super::ports::{AdoptionSource, ReportSource, VolunteerSource};
use super::presentation::{self, StatsFigures};
use super::window::{DailyRange, Period, PeriodWindows};

/// Read-only aggregation over the three record sources.
///
/// Holds no per-request state; share one instance across handlers.
pub struct DashboardService {
    reports: Arc<dyn ReportSource>,
    adoptions: Arc<dyn AdoptionSource>,
    volunteers: Arc<dyn VolunteerSource>,
    clock: Arc<dyn Clock>,
    timezone: Tz,
}

impl DashboardService {
    /// Create a service on the system clock, bucketing calendar periods in
    /// UTC.
    pub fn new(
        reports: Arc<dyn ReportSource>,
        adoptions: Arc<dyn AdoptionSource>,
        volunteers: Arc<dyn VolunteerSource>,
    ) -> Self {
        Self { reports, adoptions, volunteers, clock: Arc::new(SystemClock), timezone: Tz::UTC }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Time zone for month, weekday and "today" boundaries.
    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    pub const fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Headline cards and quick metrics for the current period.
    ///
    /// Reports are filtered by zone and period; adoption and active volunteer
    /// totals are global.
    pub async fn get_dashboard_stats(
        &self,
        zone: Option<&str>,
        period: Option<&str>,
    ) -> Result<StatsBundle> {
        let now = self.clock.now();
        let windows = PeriodWindows::resolve(Period::parse(period), now);
        let filter = ZoneFilter::parse(zone);

        let (reports, adoptions, volunteers, active_volunteers) = tokio::try_join!(
            self.reports.list_all(),
            self.adoptions.list_all(),
            self.volunteers.list_all(),
            self.volunteers.list_by_status(VolunteerStatus::Active),
        )?;

        let in_zone = |r: &&Report| filter.matches(&r.location);
        let current: Vec<&Report> = reports
            .iter()
            .filter(in_zone)
            .filter(|r| windows.current.contains(r.created_at))
            .collect();
        let previous: Vec<&Report> = reports
            .iter()
            .filter(in_zone)
            .filter(|r| windows.previous.contains(r.created_at))
            .collect();

        let growth = aggregation::growth_percentage(current.len(), previous.len());
        debug!(
            zone = ?zone,
            span_days = windows.span_days,
            current = current.len(),
            previous = previous.len(),
            growth,
            "dashboard stats aggregated"
        );

        Ok(presentation::stats_bundle(StatsFigures {
            total_reports: current.len(),
            under_care: current.iter().filter(|r| r.is_under_care()).count(),
            adoptions: adoptions.len(),
            active_volunteers: active_volunteers.len(),
            growth,
            success_rate: aggregation::success_rate(current.iter().copied()),
            active_zones: aggregation::active_zones(current.iter().copied()),
            this_period: aggregation::period_summary(
                &current,
                &adoptions,
                &volunteers,
                &windows.current,
            ),
            last_period: aggregation::period_summary(
                &previous,
                &adoptions,
                &volunteers,
                &windows.previous,
            ),
        }))
    }

    /// Most recent reports, adoptions and volunteer sign-ups in one timeline.
    pub async fn get_activity_feed(&self, limit: usize) -> Result<ActivityFeed> {
        let now = self.clock.now();
        let take = feed::per_source_take(limit);

        let (reports, adoptions, volunteers) = tokio::try_join!(
            self.reports.list_recent(take),
            self.adoptions.list_recent(take),
            self.volunteers.list_recent(take),
        )?;

        let items = feed::merge(reports, adoptions, volunteers, limit, now);
        debug!(limit, per_source = take, items = items.len(), "activity feed merged");

        Ok(presentation::activity_feed(items))
    }

    /// Monthly progress, rolling weekly activity and the all-time group-by
    /// tables.
    pub async fn get_chart_data(&self, months: u32) -> Result<ChartData> {
        let now = self.clock.now();

        let (reports, adoptions) =
            tokio::try_join!(self.reports.list_all(), self.adoptions.list_all())?;

        let monthly_progress =
            aggregation::monthly_progress(&reports, &adoptions, months, now, self.timezone)?;

        Ok(ChartData {
            monthly_progress,
            weekly_activity: aggregation::weekly_activity(&reports, now, self.timezone),
            zone_distribution: aggregation::zone_distribution(&reports),
            status_breakdown: aggregation::status_breakdown(&reports),
        })
    }

    pub async fn get_zone_statistics(&self) -> Result<ZoneTable> {
        let reports = self.reports.list_all().await?;
        Ok(aggregation::zone_table(&reports))
    }

    /// Unfiltered quick metrics plus reports created since local midnight.
    pub async fn get_quick_stats(&self) -> Result<QuickStats> {
        let now = self.clock.now();
        let reports = self.reports.list_all().await?;

        let midnight = aggregation::local_midnight(now, self.timezone);
        let today_reports = reports.iter().filter(|r| r.created_at >= midnight).count();

        Ok(presentation::quick_stats(
            reports.len(),
            aggregation::success_rate(&reports),
            aggregation::active_zones(&reports),
            today_reports,
        ))
    }

    /// Reports per local date over the trailing 7 or 30 days.
    pub async fn get_daily_report_series(&self, range: Option<&str>) -> Result<Vec<DailyCount>> {
        let now = self.clock.now();
        let range = DailyRange::parse(range);
        let reports = self.reports.list_all().await?;

        let since = now - Duration::days(range.days());
        Ok(aggregation::daily_counts(&reports, since, self.timezone))
    }
}
