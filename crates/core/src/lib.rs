//! # StrayCare Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Record source port interfaces (traits)
//! - The dashboard aggregation engine and its response mapping
//!
//! ## Architecture Principles
//! - Only depends on `straycare-common` and `straycare-domain`
//! - No database, HTTP, or platform code
//! - All record access via traits
//! - Every operation is a pure function of the source snapshots and one
//!   captured "now"

pub mod dashboard;

pub use dashboard::ports::{AdoptionSource, ReportSource, VolunteerSource};
pub use dashboard::window::{DailyRange, Period, PeriodWindows, TimeWindow};
pub use dashboard::DashboardService;
