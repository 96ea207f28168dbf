// Domain Layer - Pure waitlist logic and entities

pub mod entry;
pub mod error;
pub mod queue;
pub mod wait_time;

// Re-exports
pub use entry::{EntryId, Position, QueueEntry};
pub use error::DomainError;
pub use queue::Waitlist;
pub use wait_time::{WaitTime, MILLIS_PER_MINUTE};
