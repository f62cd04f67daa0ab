//! Infrastructure error plumbing.

mod conversions;

pub use conversions::InfraError;
pub(crate) use conversions::{map_join_error, map_pool_error, map_sql_error};
