// Time Provider Port (for testability)

use chrono::{DateTime, TimeZone, Utc};

/// Time provider interface (allows mocking in tests)
///
/// Join timestamps and wait times are both read through this port, so a test
/// clock controls every minute the waitlist reports.
pub trait TimeProvider: Send + Sync {
    /// Get current time in milliseconds since epoch
    fn now_millis(&self) -> i64;

    /// Current time as a UTC timestamp
    fn now_utc(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.now_millis())
            .single()
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }
}

/// System time provider (production)
pub struct SystemTimeProvider;

impl TimeProvider for SystemTimeProvider {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}
