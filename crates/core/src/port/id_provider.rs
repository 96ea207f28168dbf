// ID Provider Port (for deterministic testing)

use std::sync::atomic::{AtomicU64, Ordering};

/// ID provider interface (allows deterministic IDs in tests)
pub trait IdProvider: Send + Sync {
    /// Generate a new entry ID
    ///
    /// Uniqueness is checked by the engine, so an implementation may repeat
    /// itself; repeats are retried up to the configured attempt budget.
    fn generate_id(&self) -> String;
}

/// UUID v4 provider (production)
pub struct UuidProvider;

impl IdProvider for UuidProvider {
    fn generate_id(&self) -> String {
        uuid::Uuid::new_v4().simple().to_string()
    }
}

/// Monotonic counter provider: `1`, `2`, `3`, ...
///
/// Never repeats within one process; labels read like paper tickets
/// ("Customer #7").
#[derive(Debug)]
pub struct SequentialIdProvider {
    next: AtomicU64,
}

impl SequentialIdProvider {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIdProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl IdProvider for SequentialIdProvider {
    fn generate_id(&self) -> String {
        self.next.fetch_add(1, Ordering::SeqCst).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uuid_provider_is_unique() {
        let provider = UuidProvider;
        let ids: HashSet<String> = (0..1000).map(|_| provider.generate_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_sequential_provider_counts_up() {
        let provider = SequentialIdProvider::new();
        assert_eq!(provider.generate_id(), "1");
        assert_eq!(provider.generate_id(), "2");
        assert_eq!(provider.generate_id(), "3");
    }

    #[test]
    fn test_sequential_provider_custom_start() {
        let provider = SequentialIdProvider::starting_at(100);
        assert_eq!(provider.generate_id(), "100");
    }
}
