//! Mock record source implementations for testing
//!
//! Each mock holds a fixed snapshot and answers the port queries in memory.
//! `FailingSource` implements every port and fails every read.

use std::sync::Arc;

use async_trait::async_trait;
use straycare_core::dashboard::ports::{AdoptionSource, ReportSource, VolunteerSource};
use straycare_domain::{
    Adoption, Report, ReportStatus, Result as DomainResult, StrayCareError, Volunteer,
    VolunteerStatus,
};

fn newest_first<T: Clone>(records: &[T], limit: usize, at: impl Fn(&T) -> i64) -> Vec<T> {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|record| std::cmp::Reverse(at(record)));
    sorted.truncate(limit);
    sorted
}

/// In-memory mock for `ReportSource`.
#[derive(Default, Clone)]
pub struct MockReportSource {
    reports: Arc<Vec<Report>>,
}

impl MockReportSource {
    pub fn new(reports: Vec<Report>) -> Self {
        Self { reports: Arc::new(reports) }
    }

    pub fn with_report(mut self, report: Report) -> Self {
        Arc::make_mut(&mut self.reports).push(report);
        self
    }
}

#[async_trait]
impl ReportSource for MockReportSource {
    async fn list_all(&self) -> DomainResult<Vec<Report>> {
        Ok(self.reports.to_vec())
    }

    async fn list_recent(&self, limit: usize) -> DomainResult<Vec<Report>> {
        Ok(newest_first(&self.reports, limit, |r| r.created_at.timestamp()))
    }

    async fn list_by_status(&self, status: ReportStatus) -> DomainResult<Vec<Report>> {
        Ok(self.reports.iter().filter(|r| r.status == Some(status)).cloned().collect())
    }

    async fn list_by_location(&self, location: &str) -> DomainResult<Vec<Report>> {
        Ok(self.reports.iter().filter(|r| r.location == location).cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Report>> {
        Ok(self.reports.iter().find(|r| r.id == id).cloned())
    }

    async fn count(&self) -> DomainResult<usize> {
        Ok(self.reports.len())
    }
}

/// In-memory mock for `AdoptionSource`.
#[derive(Default, Clone)]
pub struct MockAdoptionSource {
    adoptions: Arc<Vec<Adoption>>,
}

impl MockAdoptionSource {
    pub fn new(adoptions: Vec<Adoption>) -> Self {
        Self { adoptions: Arc::new(adoptions) }
    }
}

#[async_trait]
impl AdoptionSource for MockAdoptionSource {
    async fn list_all(&self) -> DomainResult<Vec<Adoption>> {
        Ok(self.adoptions.to_vec())
    }

    async fn list_recent(&self, limit: usize) -> DomainResult<Vec<Adoption>> {
        Ok(newest_first(&self.adoptions, limit, |a| a.created_at.timestamp()))
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Adoption>> {
        Ok(self.adoptions.iter().find(|a| a.id == id).cloned())
    }

    async fn count(&self) -> DomainResult<usize> {
        Ok(self.adoptions.len())
    }
}

/// In-memory mock for `VolunteerSource`.
#[derive(Default, Clone)]
pub struct MockVolunteerSource {
    volunteers: Arc<Vec<Volunteer>>,
}

impl MockVolunteerSource {
    pub fn new(volunteers: Vec<Volunteer>) -> Self {
        Self { volunteers: Arc::new(volunteers) }
    }
}

#[async_trait]
impl VolunteerSource for MockVolunteerSource {
    async fn list_all(&self) -> DomainResult<Vec<Volunteer>> {
        Ok(self.volunteers.to_vec())
    }

    async fn list_recent(&self, limit: usize) -> DomainResult<Vec<Volunteer>> {
        Ok(newest_first(&self.volunteers, limit, |v| v.created_at.timestamp()))
    }

    async fn list_by_status(&self, status: VolunteerStatus) -> DomainResult<Vec<Volunteer>> {
        Ok(self.volunteers.iter().filter(|v| v.status == status).cloned().collect())
    }

    async fn list_by_area(&self, area: &str) -> DomainResult<Vec<Volunteer>> {
        Ok(self.volunteers.iter().filter(|v| v.area == area).cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<Volunteer>> {
        Ok(self.volunteers.iter().find(|v| v.id == id).cloned())
    }

    async fn count(&self) -> DomainResult<usize> {
        Ok(self.volunteers.len())
    }
}

/// Source whose every read fails with a database error.
#[derive(Default, Clone, Copy)]
pub struct FailingSource;

fn unavailable<T>() -> DomainResult<T> {
    Err(StrayCareError::Database("source unavailable".to_string()))
}

#[async_trait]
impl ReportSource for FailingSource {
    async fn list_all(&self) -> DomainResult<Vec<Report>> {
        unavailable()
    }

    async fn list_recent(&self, _limit: usize) -> DomainResult<Vec<Report>> {
        unavailable()
    }

    async fn list_by_status(&self, _status: ReportStatus) -> DomainResult<Vec<Report>> {
        unavailable()
    }

    async fn list_by_location(&self, _location: &str) -> DomainResult<Vec<Report>> {
        unavailable()
    }

    async fn find_by_id(&self, _id: &str) -> DomainResult<Option<Report>> {
        unavailable()
    }

    async fn count(&self) -> DomainResult<usize> {
        unavailable()
    }
}

#[async_trait]
impl AdoptionSource for FailingSource {
    async fn list_all(&self) -> DomainResult<Vec<Adoption>> {
        unavailable()
    }

    async fn list_recent(&self, _limit: usize) -> DomainResult<Vec<Adoption>> {
        unavailable()
    }

    async fn find_by_id(&self, _id: &str) -> DomainResult<Option<Adoption>> {
        unavailable()
    }

    async fn count(&self) -> DomainResult<usize> {
        unavailable()
    }
}

#[async_trait]
impl VolunteerSource for FailingSource {
    async fn list_all(&self) -> DomainResult<Vec<Volunteer>> {
        unavailable()
    }

    async fn list_recent(&self, _limit: usize) -> DomainResult<Vec<Volunteer>> {
        unavailable()
    }

    async fn list_by_status(&self, _status: VolunteerStatus) -> DomainResult<Vec<Volunteer>> {
        unavailable()
    }

    async fn list_by_area(&self, _area: &str) -> DomainResult<Vec<Volunteer>> {
        unavailable()
    }

    async fn find_by_id(&self, _id: &str) -> DomainResult<Option<Volunteer>> {
        unavailable()
    }

    async fn count(&self) -> DomainResult<usize> {
        unavailable()
    }
}
