//! Mock clock for deterministic testing
//!
//! Clones share the same underlying instant, so a test can hand one clone to
//! the service under test and move time with the other.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};

use crate::time::Clock;

#[derive(Debug, Clone)]
pub struct MockClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl MockClock {
    /// Create a clock frozen at `at`.
    pub fn new(at: DateTime<Utc>) -> Self {
        Self { now: Arc::new(Mutex::new(at)) }
    }

    /// Jump to an absolute instant.
    pub fn set(&self, at: DateTime<Utc>) {
        // Test utility: panic on poisoned mutex to fail tests early
        *self.now.lock().expect("mutex poisoned") = at;
    }

    /// Move the clock forward (or backward, with a negative duration).
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{Duration, Utc};
    /// use straycare_common::testing::MockClock;
    /// use straycare_common::time::Clock;
    ///
    /// let start = Utc::now();
    /// let clock = MockClock::new(start);
    /// clock.advance(Duration::minutes(10));
    /// assert_eq!(clock.now() - start, Duration::minutes(10));
    /// ```
    pub fn advance(&self, by: Duration) {
        // Test utility: panic on poisoned mutex to fail tests early
        let mut now = self.now.lock().expect("mutex poisoned");
        *now += by;
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl Clock for MockClock {
    fn now(&self) -> DateTime<Utc> {
        // Test utility: panic on poisoned mutex to fail tests early
        *self.now.lock().expect("mutex poisoned")
    }
}
