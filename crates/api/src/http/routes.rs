//! `/api/dashboard` routes
//!
//! Query parameters use the dashboard client's names (`timeRange`).
//! Negative counts are treated as zero.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use straycare_domain::{ActivityFeed, ChartData, DailyCount, QuickStats, StatsBundle, ZoneTable};

use super::error::ApiError;
use crate::commands;
use crate::context::AppContext;

type SharedContext = Arc<AppContext>;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatsQuery {
    zone: Option<String>,
    time_range: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ActivityQuery {
    limit: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
struct ChartQuery {
    months: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
struct ReportSeriesQuery {
    period: Option<String>,
}

fn non_negative<T: TryFrom<i64>>(value: i64, max: T) -> T {
    T::try_from(value.max(0)).unwrap_or(max)
}

pub fn router(ctx: SharedContext) -> Router {
    let dashboard = Router::new()
        .route("/stats", get(stats))
        .route("/activity", get(activity))
        .route("/charts", get(charts))
        .route("/charts/reports", get(report_series))
        .route("/zones", get(zones))
        .route("/quick-stats", get(quick_stats))
        .route("/health", get(health));

    Router::new().nest("/api/dashboard", dashboard).with_state(ctx)
}

async fn stats(
    State(ctx): State<SharedContext>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<StatsBundle>, ApiError> {
    let stats =
        commands::get_dashboard_stats(&ctx, query.zone.as_deref(), query.time_range.as_deref())
            .await?;
    Ok(Json(stats))
}

async fn activity(
    State(ctx): State<SharedContext>,
    Query(query): Query<ActivityQuery>,
) -> Result<Json<ActivityFeed>, ApiError> {
    let limit = query.limit.map(|limit| non_negative(limit, usize::MAX));
    Ok(Json(commands::get_activity_feed(&ctx, limit).await?))
}

async fn charts(
    State(ctx): State<SharedContext>,
    Query(query): Query<ChartQuery>,
) -> Result<Json<ChartData>, ApiError> {
    let months = query.months.map(|months| non_negative(months, u32::MAX));
    Ok(Json(commands::get_chart_data(&ctx, months).await?))
}

async fn report_series(
    State(ctx): State<SharedContext>,
    Query(query): Query<ReportSeriesQuery>,
) -> Result<Json<Vec<DailyCount>>, ApiError> {
    Ok(Json(commands::get_daily_report_series(&ctx, query.period.as_deref()).await?))
}

async fn zones(State(ctx): State<SharedContext>) -> Result<Json<ZoneTable>, ApiError> {
    Ok(Json(commands::get_zone_statistics(&ctx).await?))
}

async fn quick_stats(State(ctx): State<SharedContext>) -> Result<Json<QuickStats>, ApiError> {
    Ok(Json(commands::get_quick_stats(&ctx).await?))
}

async fn health(State(ctx): State<SharedContext>) -> impl IntoResponse {
    let status = commands::get_app_health(&ctx).await;
    let code =
        if status.is_healthy() { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (code, Json(status))
}
