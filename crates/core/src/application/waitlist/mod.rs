// Queue Engine - Core use cases for the waitlist

pub mod enqueue;

use crate::config::EngineConfig;
use crate::domain::{DomainError, QueueEntry, WaitTime, Waitlist};
use crate::port::{IdProvider, TimeProvider};
use std::sync::Arc;
use tracing::{debug, info};

/// Owns the waitlist and the ports that stamp new entries
pub struct QueueEngine {
    waitlist: Waitlist,
    id_provider: Arc<dyn IdProvider>,
    time_provider: Arc<dyn TimeProvider>,
    max_id_attempts: u32,
}

impl QueueEngine {
    pub fn new(
        config: &EngineConfig,
        id_provider: Arc<dyn IdProvider>,
        time_provider: Arc<dyn TimeProvider>,
    ) -> Self {
        Self {
            waitlist: Waitlist::new(config.capacity),
            id_provider,
            time_provider,
            max_id_attempts: config.max_id_attempts,
        }
    }

    /// Append a new customer at the tail of the line
    pub fn enqueue(&mut self) -> Result<QueueEntry, DomainError> {
        enqueue::execute(
            &mut self.waitlist,
            self.id_provider.as_ref(),
            self.time_provider.as_ref(),
            self.max_id_attempts,
        )
    }

    /// Serve the head of the line
    ///
    /// Returns `None` on an empty waitlist; that is not an error.
    pub fn dequeue_head(&mut self) -> Option<QueueEntry> {
        match self.waitlist.pop_front() {
            Some(served) => {
                info!(
                    entry_id = %served.id,
                    remaining = self.waitlist.len(),
                    "Customer served"
                );
                Some(served)
            }
            None => {
                debug!("Leave ignored: waitlist is empty");
                None
            }
        }
    }

    /// Wait time of `entry` at `now` (epoch ms)
    pub fn wait_time(&self, entry: &QueueEntry, now: i64) -> WaitTime {
        WaitTime::between(entry, now)
    }

    /// Wait time of `entry` at the engine's current time
    pub fn wait_time_now(&self, entry: &QueueEntry) -> WaitTime {
        self.wait_time(entry, self.now_millis())
    }

    pub fn now_millis(&self) -> i64 {
        self.time_provider.now_millis()
    }

    pub fn entries(&self) -> &[QueueEntry] {
        self.waitlist.entries()
    }

    pub fn head(&self) -> Option<&QueueEntry> {
        self.waitlist.head()
    }

    pub fn len(&self) -> usize {
        self.waitlist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waitlist.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.waitlist.capacity()
    }

    pub fn is_full(&self) -> bool {
        self.waitlist.is_full()
    }
}
