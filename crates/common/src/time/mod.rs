//! Time utilities and abstractions
//!
//! - **[`clock`]**: wall-clock abstraction so one request reads "now" once
//! - **[`format`]**: relative time strings for the activity feed
//!
//! ## Usage
//!
//! ```rust
//! use chrono::Duration;
//! use straycare_common::time::{format_time_ago, Clock, SystemClock};
//!
//! let now = SystemClock.now();
//! assert_eq!(format_time_ago(now - Duration::minutes(5), now), "5 min ago");
//! ```

pub mod clock;
pub mod format;

pub use clock::{Clock, SystemClock};
pub use format::format_time_ago;
