//! Operational dashboard aggregation
//!
//! Flow: the service pulls snapshots from the record sources, `aggregation`
//! filters and buckets them in memory, `feed` merges the three record kinds
//! into one timeline and `presentation` shapes the responses.

pub mod aggregation;
pub mod feed;
pub mod ports;
pub mod presentation;
pub mod service;
pub mod window;

pub use feed::ActivityEvent;
pub use service::DashboardService;
