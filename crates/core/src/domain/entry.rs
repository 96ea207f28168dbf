// Queue Entry Domain Model

use serde::{Deserialize, Serialize};

/// Entry ID (opaque, assigned once by an IdProvider)
pub type EntryId = String;

/// 1-based rank within the waitlist
pub type Position = usize;

/// One customer's slot in the waitlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueEntry {
    pub id: EntryId,
    pub position: Position,
    pub joined_at: i64, // epoch ms
}

impl QueueEntry {
    /// Create a new entry
    ///
    /// # Arguments
    ///
    /// * `id` - Unique entry ID (injected, not generated)
    /// * `position` - Rank at creation time (tail of the line)
    /// * `joined_at` - Join timestamp in epoch ms (injected, not system time)
    pub fn new(id: impl Into<String>, position: Position, joined_at: i64) -> Self {
        Self {
            id: id.into(),
            position,
            joined_at,
        }
    }

    /// Display label shown next to the position badge
    pub fn label(&self) -> String {
        format!("Customer #{}", self.id)
    }
}
