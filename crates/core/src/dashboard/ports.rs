//! Port interfaces for the record sources
//!
//! The three collections are owned by other services. The dashboard only
//! reads them; implementations must return snapshots ordered as documented
//! and surface read failures as errors.

use async_trait::async_trait;
use straycare_domain::{Adoption, Report, ReportStatus, Result, Volunteer, VolunteerStatus};

/// Read access to intake reports
#[async_trait]
pub trait ReportSource: Send + Sync {
    /// Every report, in no particular order
    async fn list_all(&self) -> Result<Vec<Report>>;

    /// Up to `limit` reports, newest first
    async fn list_recent(&self, limit: usize) -> Result<Vec<Report>>;

    /// Reports with the given status
    async fn list_by_status(&self, status: ReportStatus) -> Result<Vec<Report>>;

    /// Reports whose location equals `location` exactly
    async fn list_by_location(&self, location: &str) -> Result<Vec<Report>>;

    /// The report with `id`, if any
    async fn find_by_id(&self, id: &str) -> Result<Option<Report>>;

    /// Number of stored reports
    async fn count(&self) -> Result<usize>;
}

/// Read access to adoption records
#[async_trait]
pub trait AdoptionSource: Send + Sync {
    /// Every adoption, in no particular order
    async fn list_all(&self) -> Result<Vec<Adoption>>;

    /// Up to `limit` adoptions, newest first
    async fn list_recent(&self, limit: usize) -> Result<Vec<Adoption>>;

    /// The adoption with `id`, if any
    async fn find_by_id(&self, id: &str) -> Result<Option<Adoption>>;

    /// Number of stored adoptions
    async fn count(&self) -> Result<usize>;
}

/// Read access to volunteer records
#[async_trait]
pub trait VolunteerSource: Send + Sync {
    /// Every volunteer, in no particular order
    async fn list_all(&self) -> Result<Vec<Volunteer>>;

    /// Up to `limit` volunteers, newest first
    async fn list_recent(&self, limit: usize) -> Result<Vec<Volunteer>>;

    /// Volunteers with the given status
    async fn list_by_status(&self, status: VolunteerStatus) -> Result<Vec<Volunteer>>;

    /// Volunteers whose area equals `area` exactly
    async fn list_by_area(&self, area: &str) -> Result<Vec<Volunteer>>;

    /// The volunteer with `id`, if any
    async fn find_by_id(&self, id: &str) -> Result<Option<Volunteer>>;

    /// Number of stored volunteers
    async fn count(&self) -> Result<usize>;
}
