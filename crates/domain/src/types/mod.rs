//! Domain types and models
//!
//! `records` holds the read-only projections of the externally owned
//! collections; `dashboard` holds the per-request response shapes.

pub mod dashboard;
pub mod records;

pub use dashboard::*;
pub use records::*;
