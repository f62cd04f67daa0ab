//! Dashboard commands - route handlers call these

mod dashboard;
mod health;

pub use dashboard::*;
pub use health::*;
