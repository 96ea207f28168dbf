// Waitlist Domain Model

use super::entry::{EntryId, QueueEntry};
use super::error::{DomainError, Result};

/// Ordered FIFO line of entries with a fixed capacity
///
/// Invariants held after every completed mutation:
/// - positions are exactly `1..=len` in sequence order
/// - `joined_at` is non-decreasing in sequence order
/// - `len <= capacity`
/// - no two entries share an ID
#[derive(Debug, Clone)]
pub struct Waitlist {
    entries: Vec<QueueEntry>,
    capacity: usize,
}

impl Waitlist {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    pub fn entries(&self) -> &[QueueEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Entry that will be served next
    pub fn head(&self) -> Option<&QueueEntry> {
        self.entries.first()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Append a new entry at the tail
    ///
    /// `joined_at` is raised to the tail's timestamp if the clock stepped
    /// backwards, so arrival order and timestamp order never disagree.
    pub fn push_back(&mut self, id: EntryId, joined_at: i64) -> Result<&QueueEntry> {
        if self.is_full() {
            return Err(DomainError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        if self.contains_id(&id) {
            return Err(DomainError::DuplicateId { id });
        }

        let joined_at = match self.entries.last() {
            Some(tail) => joined_at.max(tail.joined_at),
            None => joined_at,
        };
        let position = self.entries.len() + 1;
        self.entries.push(QueueEntry::new(id, position, joined_at));

        Ok(&self.entries[position - 1])
    }

    /// Remove the head entry and renumber the rest (no-op when empty)
    pub fn pop_front(&mut self) -> Option<QueueEntry> {
        if self.entries.is_empty() {
            return None;
        }

        let served = self.entries.remove(0);
        self.renumber();
        Some(served)
    }

    fn renumber(&mut self) {
        for (index, entry) in self.entries.iter_mut().enumerate() {
            entry.position = index + 1;
        }
    }
}
