//! Record projections consumed by the dashboard
//!
//! These types mirror the documents owned by the intake, adoption and
//! volunteer services. The dashboard never mutates them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::impl_domain_status_conversions;

/* -------------------------------------------------------------------------- */
/* Intake reports */
/* -------------------------------------------------------------------------- */

/// Observed condition of a reported animal, mildest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportCondition {
    Healthy,
    Malnourished,
    Sick,
    Injured,
    Critical,
}

impl ReportCondition {
    /// Critical and injured animals are flagged as urgent in the feed.
    pub const fn is_urgent(self) -> bool {
        matches!(self, Self::Critical | Self::Injured)
    }
}

impl_domain_status_conversions!(ReportCondition {
    Healthy => "healthy",
    Malnourished => "malnourished",
    Sick => "sick",
    Injured => "injured",
    Critical => "critical",
});

/// Report lifecycle: pending → assigned → in_progress → rescued/completed →
/// closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    Pending,
    Assigned,
    InProgress,
    Rescued,
    Completed,
    Closed,
}

impl ReportStatus {
    /// Upper-case label used as the status breakdown key.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Assigned => "ASSIGNED",
            Self::InProgress => "IN_PROGRESS",
            Self::Rescued => "RESCUED",
            Self::Completed => "COMPLETED",
            Self::Closed => "CLOSED",
        }
    }

    /// Animal is currently being cared for (also counted as "rescued" in
    /// chart and zone tables).
    pub const fn is_under_care(self) -> bool {
        matches!(self, Self::InProgress | Self::Rescued)
    }

    /// Case reached a positive outcome.
    pub const fn is_successful(self) -> bool {
        matches!(self, Self::Completed | Self::Rescued)
    }
}

impl_domain_status_conversions!(ReportStatus {
    Pending => "pending",
    Assigned => "assigned",
    InProgress => "in_progress",
    Rescued => "rescued",
    Completed => "completed",
    Closed => "closed",
});

/// Intake report projection.
///
/// `location` is free text and doubles as the zone key; it is never
/// normalised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub condition: Option<ReportCondition>,
    #[serde(default)]
    pub status: Option<ReportStatus>,
    pub created_at: DateTime<Utc>,
}

impl Report {
    pub fn is_under_care(&self) -> bool {
        self.status.is_some_and(ReportStatus::is_under_care)
    }

    pub fn is_successful(&self) -> bool {
        self.status.is_some_and(ReportStatus::is_successful)
    }

    pub fn is_urgent(&self) -> bool {
        self.condition.is_some_and(ReportCondition::is_urgent)
    }

    /// Status breakdown key; a missing status reads as pending.
    pub fn status_label(&self) -> &'static str {
        self.status.map_or(crate::constants::MISSING_STATUS_LABEL, ReportStatus::label)
    }
}

/* -------------------------------------------------------------------------- */
/* Adoptions */
/* -------------------------------------------------------------------------- */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdoptionStatus {
    Pending,
    UnderReview,
    Approved,
    Rejected,
    Completed,
}

impl_domain_status_conversions!(AdoptionStatus {
    Pending => "pending",
    UnderReview => "under_review",
    Approved => "approved",
    Rejected => "rejected",
    Completed => "completed",
});

/// Adoption record projection.
///
/// The dashboard counts every record as a successful adoption regardless of
/// `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Adoption {
    pub id: String,
    pub dog_name: String,
    #[serde(default)]
    pub status: Option<AdoptionStatus>,
    pub created_at: DateTime<Utc>,
}

/* -------------------------------------------------------------------------- */
/* Volunteers */
/* -------------------------------------------------------------------------- */

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VolunteerStatus {
    Pending,
    Approved,
    Active,
    Inactive,
    Rejected,
}

impl_domain_status_conversions!(VolunteerStatus {
    Pending => "pending",
    Approved => "approved",
    Active => "active",
    Inactive => "inactive",
    Rejected => "rejected",
});

/// Volunteer record projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volunteer {
    pub id: String,
    pub name: String,
    pub area: String,
    pub status: VolunteerStatus,
    pub created_at: DateTime<Utc>,
}
