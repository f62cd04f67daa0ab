//! # StrayCare Domain
//!
//! Business domain types and models for the StrayCare dashboard.
//!
//! This crate contains:
//! - Read-only record projections (reports, adoptions, volunteers)
//! - Dashboard response shapes (stat cards, activity feed, chart series)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Presentation constants
//!
//! ## Architecture
//! - No dependencies on other StrayCare crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
