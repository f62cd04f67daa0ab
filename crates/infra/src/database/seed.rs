//! Demonstration dataset
//!
//! Populates an empty database with a small spread of reports, adoptions
//! and volunteers so the dashboard has something to show. Timestamps are
//! relative to the supplied `now`.

use chrono::{DateTime, Duration, Utc};
use straycare_domain::{
    Adoption, AdoptionStatus, Report, ReportCondition, ReportStatus, Result, Volunteer,
    VolunteerStatus,
};
use tracing::info;

use super::adoption_repository::insert_adoption;
use super::manager::DbManager;
use super::report_repository::insert_report;
use super::volunteer_repository::insert_volunteer;
use crate::errors::map_sql_error;

/// Rows written by [`seed_sample_data`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub reports: usize,
    pub adoptions: usize,
    pub volunteers: usize,
}

impl SeedSummary {
    pub const fn is_empty(&self) -> bool {
        self.reports == 0 && self.adoptions == 0 && self.volunteers == 0
    }
}

type ReportRow = (&'static str, Option<ReportCondition>, Option<ReportStatus>, i64, &'static str);

// (location, condition, status, hours ago, description)
const REPORTS: &[ReportRow] = &[
    (
        "Riverside",
        Some(ReportCondition::Injured),
        Some(ReportStatus::InProgress),
        2,
        "Limping brown dog near the footbridge",
    ),
    (
        "Old Town",
        Some(ReportCondition::Malnourished),
        Some(ReportStatus::Pending),
        5,
        "Thin puppy behind the market stalls",
    ),
    (
        "Harbor District",
        Some(ReportCondition::Critical),
        Some(ReportStatus::Assigned),
        20,
        "Dog hit by a scooter, not moving much",
    ),
    (
        "Green Park",
        Some(ReportCondition::Healthy),
        Some(ReportStatus::Rescued),
        50,
        "Friendly stray following joggers",
    ),
    (
        "Riverside",
        Some(ReportCondition::Sick),
        Some(ReportStatus::Completed),
        24 * 6,
        "Coughing dog under the bridge",
    ),
    ("Old Town", None, None, 24 * 12, "Mother and three pups in an alley"),
    (
        "Harbor District",
        Some(ReportCondition::Sick),
        Some(ReportStatus::Closed),
        24 * 25,
        "Skin infection, shy",
    ),
    (
        "Green Park",
        Some(ReportCondition::Injured),
        Some(ReportStatus::Completed),
        24 * 40,
        "Paw injury near the pond",
    ),
    (
        "Riverside",
        Some(ReportCondition::Healthy),
        Some(ReportStatus::Rescued),
        24 * 75,
        "Collarless terrier",
    ),
    (
        "Old Town",
        Some(ReportCondition::Malnourished),
        Some(ReportStatus::Completed),
        24 * 110,
        "Elderly dog by the church",
    ),
    (
        "Harbor District",
        Some(ReportCondition::Critical),
        Some(ReportStatus::InProgress),
        24 * 150,
        "Tangled in fishing net",
    ),
];

// (dog name, status, hours ago)
const ADOPTIONS: &[(&str, Option<AdoptionStatus>, i64)] = &[
    ("Biscuit", Some(AdoptionStatus::Completed), 3),
    ("Luna", Some(AdoptionStatus::Approved), 24 * 4),
    ("Pepper", Some(AdoptionStatus::UnderReview), 24 * 18),
    ("Max", Some(AdoptionStatus::Completed), 24 * 45),
    ("Kaju", None, 24 * 100),
];

// (name, area, status, hours ago)
const VOLUNTEERS: &[(&str, &str, VolunteerStatus, i64)] = &[
    ("Asha Rao", "Riverside", VolunteerStatus::Active, 8),
    ("Daniel Kim", "Old Town", VolunteerStatus::Active, 24 * 9),
    ("Mira Patel", "Harbor District", VolunteerStatus::Pending, 24 * 15),
    ("Tom Okafor", "Green Park", VolunteerStatus::Active, 24 * 60),
    ("Lea Novak", "Riverside", VolunteerStatus::Inactive, 24 * 120),
];

/// Insert the demonstration dataset when the `reports` table is empty.
///
/// Runs in one transaction. Returns an empty summary when data already
/// exists.
pub fn seed_sample_data(db: &DbManager, now: DateTime<Utc>) -> Result<SeedSummary> {
    let mut conn = db.get_connection()?;

    let existing: i64 = conn
        .query_row("SELECT COUNT(*) FROM reports", [], |row| row.get(0))
        .map_err(map_sql_error)?;
    if existing > 0 {
        info!(existing, "sample data skipped, reports already present");
        return Ok(SeedSummary::default());
    }

    let tx = conn.transaction().map_err(map_sql_error)?;

    for (idx, (location, condition, status, hours, description)) in REPORTS.iter().enumerate() {
        let report = Report {
            id: format!("seed-report-{}", idx + 1),
            location: (*location).to_string(),
            description: Some((*description).to_string()),
            condition: *condition,
            status: *status,
            created_at: now - Duration::hours(*hours),
        };
        insert_report(&tx, &report).map_err(map_sql_error)?;
    }

    for (idx, (dog_name, status, hours)) in ADOPTIONS.iter().enumerate() {
        let adoption = Adoption {
            id: format!("seed-adoption-{}", idx + 1),
            dog_name: (*dog_name).to_string(),
            status: *status,
            created_at: now - Duration::hours(*hours),
        };
        insert_adoption(&tx, &adoption).map_err(map_sql_error)?;
    }

    for (idx, (name, area, status, hours)) in VOLUNTEERS.iter().enumerate() {
        let volunteer = Volunteer {
            id: format!("seed-volunteer-{}", idx + 1),
            name: (*name).to_string(),
            area: (*area).to_string(),
            status: *status,
            created_at: now - Duration::hours(*hours),
        };
        insert_volunteer(&tx, &volunteer).map_err(map_sql_error)?;
    }

    tx.commit().map_err(map_sql_error)?;

    let summary = SeedSummary {
        reports: REPORTS.len(),
        adoptions: ADOPTIONS.len(),
        volunteers: VOLUNTEERS.len(),
    };
    info!(
        reports = summary.reports,
        adoptions = summary.adoptions,
        volunteers = summary.volunteers,
        "sample data seeded"
    );
    Ok(summary)
}
