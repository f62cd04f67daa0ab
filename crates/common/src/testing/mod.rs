//! Testing utilities and helpers
//!
//! - **[`assertions`]**: ordering and approximate-equality assertions
//! - **[`time`]**: controllable clock for deterministic aggregation tests
//!
//! ## Usage
//!
//! ```rust
//! use chrono::{Duration, TimeZone, Utc};
//! use straycare_common::testing::MockClock;
//! use straycare_common::time::Clock;
//!
//! let clock = MockClock::new(Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap());
//! clock.advance(Duration::hours(1));
//! assert_eq!(clock.now(), Utc.with_ymd_and_hms(2024, 3, 10, 13, 0, 0).unwrap());
//! ```

pub mod assertions;
pub mod time;

pub use assertions::{assert_approx_eq, assert_non_increasing, assert_sorted};
pub use time::MockClock;
