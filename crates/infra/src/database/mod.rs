//! Database implementations

mod columns;

pub mod adoption_repository;
pub mod manager;
pub mod report_repository;
pub mod seed;
pub mod volunteer_repository;

pub use adoption_repository::*;
pub use manager::*;
pub use report_repository::*;
pub use seed::*;
pub use volunteer_repository::*;
