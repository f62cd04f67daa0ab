//! Dashboard response types
//!
//! Every value here is derived per request and discarded afterwards:
//! - Stats bundle (stat cards, quick metrics, period summaries)
//! - Activity feed
//! - Chart series and group-by tables
//! - Zone table and quick stats

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/* -------------------------------------------------------------------------- */
/* Stats bundle */
/* -------------------------------------------------------------------------- */

/// Direction of a stat card's change, derived from the sign of the growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Increase,
    Decrease,
}

impl ChangeType {
    /// Zero counts as an increase.
    pub fn from_growth(growth: f64) -> Self {
        if growth >= 0.0 {
            Self::Increase
        } else {
            Self::Decrease
        }
    }
}

/// Headline counter card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    pub label: String,
    pub value: usize,
    pub change: String,
    pub change_type: ChangeType,
    pub subtitle: String,
    pub icon: String,
    pub color: String,
}

/// Small labelled metric rendered next to the stat cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickMetric {
    pub label: String,
    pub value: String,
    pub icon: String,
    pub color: String,
}

/// Counters for one aggregation window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSummary {
    pub reports: usize,
    pub rescued: usize,
    pub adopted: usize,
    pub volunteers: usize,
}

/// Response of the dashboard statistics operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsBundle {
    pub total_reports: StatCard,
    pub under_care: StatCard,
    pub successful_adoptions: StatCard,
    pub active_volunteers: StatCard,

    pub avg_response_time: QuickMetric,
    pub success_rate: QuickMetric,
    pub active_zones: QuickMetric,

    pub this_period: PeriodSummary,
    pub last_period: PeriodSummary,
    pub growth_percentage: f64,
}

/* -------------------------------------------------------------------------- */
/* Activity feed */
/* -------------------------------------------------------------------------- */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Rescue,
    Adoption,
    Volunteer,
}

/// Normalised feed entry built from a report, adoption or volunteer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub title: String,
    pub description: String,
    pub location: String,
    pub time_ago: String,
    pub timestamp: DateTime<Utc>,
    pub icon: String,
    pub color: String,
    pub urgent: bool,
    /// Identifier of the source record.
    pub related_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityFeed {
    pub activities: Vec<ActivityItem>,
    pub total: usize,
    /// Urgent items in `activities`.
    pub unread_count: usize,
}

/* -------------------------------------------------------------------------- */
/* Charts */
/* -------------------------------------------------------------------------- */

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyData {
    pub month: String,
    pub reports: usize,
    pub rescued: usize,
    pub adopted: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyData {
    pub day: String,
    pub value: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    /// Oldest month first.
    pub monthly_progress: Vec<MonthlyData>,
    /// Always seven entries, Mon..Sun.
    pub weekly_activity: Vec<WeeklyData>,
    pub zone_distribution: BTreeMap<String, usize>,
    pub status_breakdown: BTreeMap<String, usize>,
}

/// Reports created on one local calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: usize,
}

/* -------------------------------------------------------------------------- */
/* Zones & quick stats */
/* -------------------------------------------------------------------------- */

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneCounter {
    pub total: usize,
    pub rescued: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneTable {
    pub zones: BTreeMap<String, ZoneCounter>,
    pub total_zones: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickStats {
    pub avg_response_time: String,
    pub success_rate: u32,
    pub active_zones: usize,
    pub today_reports: usize,
}
