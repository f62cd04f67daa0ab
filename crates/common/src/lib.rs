//! Common utilities shared across StrayCare crates.
//!
//! - `time`: clock abstraction and human-readable relative time
//! - `testing` (feature `test-utils`): mock clock and assertion helpers

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod time;

// Testing utilities
// ---------------------------------------------------------------
#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use time::{format_time_ago, Clock, SystemClock};
