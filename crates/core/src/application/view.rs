// Queue View - render model handed to the display layer

use crate::domain::{Position, QueueEntry, WaitTime};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// One rendered line of the waitlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowView {
    pub position: Position,
    pub label: String,
    pub waiting: String,
}

/// Snapshot of everything the display shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueView {
    pub headline: String,
    pub len: usize,
    pub capacity: usize,
    pub rows: Vec<RowView>,
    pub registration_visible: bool,
}

impl QueueView {
    /// Build a view of `entries` as seen at `now` (epoch ms)
    pub fn build(
        entries: &[QueueEntry],
        capacity: usize,
        registration_visible: bool,
        now: i64,
    ) -> Self {
        let rows = entries
            .iter()
            .map(|entry| RowView {
                position: entry.position,
                label: entry.label(),
                waiting: WaitTime::between(entry, now).to_string(),
            })
            .collect();

        Self {
            headline: headline(entries.len()),
            len: entries.len(),
            capacity,
            rows,
            registration_visible,
        }
    }

    /// Pretty-printed JSON for machine-readable output
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// "1 person in line", otherwise "N people in line"
pub fn headline(len: usize) -> String {
    let noun = if len == 1 { "person" } else { "people" };
    format!("{len} {noun} in line")
}
