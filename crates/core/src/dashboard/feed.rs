//! Cross-entity activity feed
//!
//! Reports, adoptions and volunteer sign-ups are wrapped in one
//! [`ActivityEvent`] sum type so the merge is a single sort.

use chrono::{DateTime, Utc};
use straycare_common::time::format_time_ago;
use straycare_domain::constants::{
    ADOPTION_DESCRIPTION, ADOPTION_ICON, ADOPTION_LOCATION, COLOR_CORAL, COLOR_LAVENDER,
    COLOR_MINT, FEED_SOURCE_COUNT, RESCUE_ICON, VOLUNTEER_ICON,
};
use straycare_domain::{ActivityItem, ActivityKind, Adoption, Report, Volunteer};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivityEvent {
    Rescue(Report),
    Adoption(Adoption),
    VolunteerJoin(Volunteer),
}

impl ActivityEvent {
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::Rescue(report) => report.created_at,
            Self::Adoption(adoption) => adoption.created_at,
            Self::VolunteerJoin(volunteer) => volunteer.created_at,
        }
    }

    /// Only rescues of critical or injured animals are urgent.
    pub fn is_urgent(&self) -> bool {
        matches!(self, Self::Rescue(report) if report.is_urgent())
    }

    /// Render into a feed item; `now` drives the relative time string.
    pub fn into_item(self, now: DateTime<Utc>) -> ActivityItem {
        let timestamp = self.timestamp();
        let urgent = self.is_urgent();
        let time_ago = format_time_ago(timestamp, now);
        let id = Uuid::new_v4().to_string();

        match self {
            Self::Rescue(report) => ActivityItem {
                id,
                kind: ActivityKind::Rescue,
                title: format!("New rescue report in {}", report.location),
                description: report.description.unwrap_or_default(),
                location: report.location,
                time_ago,
                timestamp,
                icon: RESCUE_ICON.to_string(),
                color: COLOR_CORAL.to_string(),
                urgent,
                related_id: report.id,
            },
            Self::Adoption(adoption) => ActivityItem {
                id,
                kind: ActivityKind::Adoption,
                title: format!("{} found a forever home!", adoption.dog_name),
                description: ADOPTION_DESCRIPTION.to_string(),
                location: ADOPTION_LOCATION.to_string(),
                time_ago,
                timestamp,
                icon: ADOPTION_ICON.to_string(),
                color: COLOR_LAVENDER.to_string(),
                urgent,
                related_id: adoption.id,
            },
            Self::VolunteerJoin(volunteer) => ActivityItem {
                id,
                kind: ActivityKind::Volunteer,
                title: format!("{} joined as volunteer", volunteer.name),
                description: format!("New volunteer in {}", volunteer.area),
                location: volunteer.area,
                time_ago,
                timestamp,
                icon: VOLUNTEER_ICON.to_string(),
                color: COLOR_MINT.to_string(),
                urgent,
                related_id: volunteer.id,
            },
        }
    }
}

/// How many records to pull from each source for a feed of `limit` items.
pub const fn per_source_take(limit: usize) -> usize {
    limit / FEED_SOURCE_COUNT
}

/// Merge the newest records of each kind into one timeline, newest first,
/// truncated to `limit`. Ties keep source order (reports, adoptions,
/// volunteers).
pub fn merge(
    reports: Vec<Report>,
    adoptions: Vec<Adoption>,
    volunteers: Vec<Volunteer>,
    limit: usize,
    now: DateTime<Utc>,
) -> Vec<ActivityItem> {
    let take = per_source_take(limit);

    let mut events: Vec<ActivityEvent> = reports
        .into_iter()
        .take(take)
        .map(ActivityEvent::Rescue)
        .chain(adoptions.into_iter().take(take).map(ActivityEvent::Adoption))
        .chain(volunteers.into_iter().take(take).map(ActivityEvent::VolunteerJoin))
        .collect();

    events.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
    events.truncate(limit);

    events.into_iter().map(|event| event.into_item(now)).collect()
}
