//! Response shaping
//!
//! Attaches labels, icons and colors to the aggregated numbers. No decisions
//! are made here beyond sign formatting and the "N/A" placeholder.

use straycare_domain::constants::{
    ACTIVE_ZONES_ICON, ACTIVE_ZONES_LABEL, ADOPTIONS_CHANGE, ADOPTIONS_ICON, ADOPTIONS_LABEL,
    ADOPTIONS_SUBTITLE, AVG_RESPONSE_TIME_ICON, AVG_RESPONSE_TIME_LABEL,
    AVG_RESPONSE_TIME_PLACEHOLDER, COLOR_CORAL, COLOR_LAVENDER, COLOR_MINT, COLOR_PEACH,
    NOT_AVAILABLE, SUCCESS_RATE_ICON, SUCCESS_RATE_LABEL, TOTAL_REPORTS_ICON, TOTAL_REPORTS_LABEL,
    TOTAL_REPORTS_SUBTITLE, UNDER_CARE_CHANGE, UNDER_CARE_ICON, UNDER_CARE_LABEL,
    UNDER_CARE_SUBTITLE, VOLUNTEERS_CHANGE, VOLUNTEERS_ICON, VOLUNTEERS_LABEL,
    VOLUNTEERS_SUBTITLE,
};
use straycare_domain::{
    ActivityFeed, ActivityItem, ChangeType, PeriodSummary, QuickMetric, QuickStats, StatCard,
    StatsBundle,
};

/// Numbers behind the stats bundle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsFigures {
    pub total_reports: usize,
    pub under_care: usize,
    pub adoptions: usize,
    pub active_volunteers: usize,
    pub growth: f64,
    pub success_rate: u32,
    pub active_zones: usize,
    pub this_period: PeriodSummary,
    pub last_period: PeriodSummary,
}

/// Signed whole percent, e.g. `+12%` or `-50%`.
///
/// The sign follows the unrounded growth, so a small decline reads `-0%`.
pub fn format_change(growth: f64) -> String {
    let magnitude = growth.abs().round() as i64;
    if growth < 0.0 {
        format!("-{magnitude}%")
    } else {
        format!("+{magnitude}%")
    }
}

/// Placeholder until response times are tracked; `"N/A"` for an empty set.
pub const fn avg_response_time(has_reports: bool) -> &'static str {
    if has_reports {
        AVG_RESPONSE_TIME_PLACEHOLDER
    } else {
        NOT_AVAILABLE
    }
}

fn card(
    label: &str,
    value: usize,
    change: String,
    change_type: ChangeType,
    subtitle: &str,
    icon: &str,
    color: &str,
) -> StatCard {
    StatCard {
        label: label.to_string(),
        value,
        change,
        change_type,
        subtitle: subtitle.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
    }
}

fn metric(label: &str, value: String, icon: &str, color: &str) -> QuickMetric {
    QuickMetric {
        label: label.to_string(),
        value,
        icon: icon.to_string(),
        color: color.to_string(),
    }
}

pub fn stats_bundle(figures: StatsFigures) -> StatsBundle {
    let change_type = ChangeType::from_growth(figures.growth);

    StatsBundle {
        total_reports: card(
            TOTAL_REPORTS_LABEL,
            figures.total_reports,
            format_change(figures.growth),
            change_type,
            TOTAL_REPORTS_SUBTITLE,
            TOTAL_REPORTS_ICON,
            COLOR_CORAL,
        ),
        // Secondary cards carry fixed changes; only report growth is tracked.
        under_care: card(
            UNDER_CARE_LABEL,
            figures.under_care,
            UNDER_CARE_CHANGE.to_string(),
            ChangeType::Increase,
            UNDER_CARE_SUBTITLE,
            UNDER_CARE_ICON,
            COLOR_MINT,
        ),
        successful_adoptions: card(
            ADOPTIONS_LABEL,
            figures.adoptions,
            ADOPTIONS_CHANGE.to_string(),
            ChangeType::Increase,
            ADOPTIONS_SUBTITLE,
            ADOPTIONS_ICON,
            COLOR_LAVENDER,
        ),
        active_volunteers: card(
            VOLUNTEERS_LABEL,
            figures.active_volunteers,
            VOLUNTEERS_CHANGE.to_string(),
            ChangeType::Increase,
            VOLUNTEERS_SUBTITLE,
            VOLUNTEERS_ICON,
            COLOR_PEACH,
        ),
        avg_response_time: metric(
            AVG_RESPONSE_TIME_LABEL,
            avg_response_time(figures.total_reports > 0).to_string(),
            AVG_RESPONSE_TIME_ICON,
            COLOR_CORAL,
        ),
        success_rate: metric(
            SUCCESS_RATE_LABEL,
            format!("{}%", figures.success_rate),
            SUCCESS_RATE_ICON,
            COLOR_LAVENDER,
        ),
        active_zones: metric(
            ACTIVE_ZONES_LABEL,
            figures.active_zones.to_string(),
            ACTIVE_ZONES_ICON,
            COLOR_MINT,
        ),
        this_period: figures.this_period,
        last_period: figures.last_period,
        growth_percentage: figures.growth,
    }
}

/// `total` is the truncated length; `unread_count` counts urgent items.
pub fn activity_feed(activities: Vec<ActivityItem>) -> ActivityFeed {
    let unread_count = activities.iter().filter(|item| item.urgent).count();
    ActivityFeed { total: activities.len(), unread_count, activities }
}

pub fn quick_stats(
    report_count: usize,
    success_rate: u32,
    active_zones: usize,
    today_reports: usize,
) -> QuickStats {
    QuickStats {
        avg_response_time: avg_response_time(report_count > 0).to_string(),
        success_rate,
        active_zones,
        today_reports,
    }
}
