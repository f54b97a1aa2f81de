//! Clock abstraction for obtaining the current time.

use chrono::{DateTime, Utc};

/// Provides the current UTC time.
///
/// Abstracting time access lets tests substitute a fixed clock and assert
/// on exact announcement lines instead of sampling the wall clock.
pub trait Clock: Send + Sync {
    /// Returns the current UTC time.
    fn now(&self) -> DateTime<Utc>;
}

/// Live clock backed by [`Utc::now`].
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
