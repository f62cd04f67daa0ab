//! Record builders anchored on a fixed "now".

use chrono::{DateTime, Duration, TimeZone, Utc};
use straycare_domain::{
    Adoption, Report, ReportCondition, ReportStatus, Volunteer, VolunteerStatus,
};

/// Saturday, 2024-06-15 12:00 UTC.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

pub fn report(id: &str, location: &str, status: Option<ReportStatus>, age: Duration) -> Report {
    Report {
        id: id.to_string(),
        location: location.to_string(),
        description: Some(format!("Dog spotted in {location}")),
        condition: None,
        status,
        created_at: fixed_now() - age,
    }
}

pub fn urgent_report(
    id: &str,
    location: &str,
    condition: ReportCondition,
    age: Duration,
) -> Report {
    Report { condition: Some(condition), ..report(id, location, None, age) }
}

pub fn adoption(id: &str, dog_name: &str, age: Duration) -> Adoption {
    Adoption {
        id: id.to_string(),
        dog_name: dog_name.to_string(),
        status: None,
        created_at: fixed_now() - age,
    }
}

pub fn volunteer(id: &str, area: &str, status: VolunteerStatus, age: Duration) -> Volunteer {
    Volunteer {
        id: id.to_string(),
        name: format!("Volunteer {id}"),
        area: area.to_string(),
        status,
        created_at: fixed_now() - age,
    }
}
