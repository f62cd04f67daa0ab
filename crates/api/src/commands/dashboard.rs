//! Dashboard commands
//!
//! Thin wrappers over [`straycare_core::DashboardService`] that apply the
//! configured defaults and log every execution.

use straycare_domain::{
    ActivityFeed, ChartData, DailyCount, QuickStats, Result as DomainResult, StatsBundle,
    ZoneTable,
};

use crate::context::AppContext;
use crate::utils::command_helpers::execute_logged;

pub async fn get_dashboard_stats(
    ctx: &AppContext,
    zone: Option<&str>,
    time_range: Option<&str>,
) -> DomainResult<StatsBundle> {
    execute_logged("dashboard::get_dashboard_stats", || async {
        ctx.dashboard.get_dashboard_stats(zone, time_range).await
    })
    .await
}

/// `limit` falls back to `dashboard.default_feed_limit`.
pub async fn get_activity_feed(
    ctx: &AppContext,
    limit: Option<usize>,
) -> DomainResult<ActivityFeed> {
    let limit = limit.unwrap_or(ctx.config.dashboard.default_feed_limit);
    execute_logged("dashboard::get_activity_feed", || async {
        ctx.dashboard.get_activity_feed(limit).await
    })
    .await
}

/// `months` falls back to `dashboard.default_chart_months`.
pub async fn get_chart_data(ctx: &AppContext, months: Option<u32>) -> DomainResult<ChartData> {
    let months = months.unwrap_or(ctx.config.dashboard.default_chart_months);
    execute_logged("dashboard::get_chart_data", || async {
        ctx.dashboard.get_chart_data(months).await
    })
    .await
}

pub async fn get_daily_report_series(
    ctx: &AppContext,
    period: Option<&str>,
) -> DomainResult<Vec<DailyCount>> {
    execute_logged("dashboard::get_daily_report_series", || async {
        ctx.dashboard.get_daily_report_series(period).await
    })
    .await
}

pub async fn get_zone_statistics(ctx: &AppContext) -> DomainResult<ZoneTable> {
    execute_logged("dashboard::get_zone_statistics", || async {
        ctx.dashboard.get_zone_statistics().await
    })
    .await
}

pub async fn get_quick_stats(ctx: &AppContext) -> DomainResult<QuickStats> {
    execute_logged("dashboard::get_quick_stats", || async { ctx.dashboard.get_quick_stats().await })
        .await
}
