// Wait Time - elapsed whole minutes since an entry joined

use super::entry::QueueEntry;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MILLIS_PER_MINUTE: i64 = 60_000;

/// Elapsed waiting time, truncated to whole minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WaitTime {
    minutes: i64,
}

impl WaitTime {
    /// Wait time of `entry` as observed at `now` (epoch ms)
    ///
    /// A `now` earlier than `joined_at` (clock skew) reads as zero.
    pub fn between(entry: &QueueEntry, now: i64) -> Self {
        let elapsed_ms = now.saturating_sub(entry.joined_at).max(0);
        Self {
            minutes: elapsed_ms / MILLIS_PER_MINUTE,
        }
    }

    pub fn minutes(&self) -> i64 {
        self.minutes
    }
}

impl fmt::Display for WaitTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry_at(joined_at: i64) -> QueueEntry {
        QueueEntry::new("a", 1, joined_at)
    }

    #[test]
    fn test_zero_at_join_instant() {
        let entry = entry_at(1_000_000);
        assert_eq!(WaitTime::between(&entry, 1_000_000).to_string(), "0 min");
    }

    #[test]
    fn test_truncates_partial_minutes() {
        let entry = entry_at(0);
        assert_eq!(WaitTime::between(&entry, 59_999).minutes(), 0);
        assert_eq!(WaitTime::between(&entry, 60_000).minutes(), 1);
        assert_eq!(WaitTime::between(&entry, 179_999).to_string(), "2 min");
    }

    #[test]
    fn test_clock_skew_reads_zero() {
        let entry = entry_at(500_000);
        assert_eq!(WaitTime::between(&entry, 100_000).minutes(), 0);
    }

    #[test]
    fn test_monotonic_in_now() {
        let entry = entry_at(12_345);
        let mut previous = WaitTime::between(&entry, 12_345);
        for now in (12_345..2_000_000).step_by(7_919) {
            let current = WaitTime::between(&entry, now);
            assert!(current >= previous);
            previous = current;
        }
    }
}
