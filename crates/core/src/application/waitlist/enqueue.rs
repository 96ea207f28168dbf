// Enqueue Use Case

use crate::domain::{DomainError, QueueEntry, Waitlist};
use crate::port::{IdProvider, TimeProvider};
use tracing::{info, warn};

/// Execute enqueue use case
///
/// # Arguments
///
/// * `waitlist` - Waitlist to append to
/// * `id_provider` - ID generator (injected for determinism)
/// * `time_provider` - Time provider (injected for determinism)
/// * `max_id_attempts` - How many IDs to try before reporting a collision
///
/// Capacity is checked before any ID is generated, and a failed call leaves
/// the waitlist untouched.
pub fn execute(
    waitlist: &mut Waitlist,
    id_provider: &dyn IdProvider,
    time_provider: &dyn TimeProvider,
    max_id_attempts: u32,
) -> Result<QueueEntry, DomainError> {
    if waitlist.is_full() {
        warn!(
            capacity = waitlist.capacity(),
            "Join rejected: waitlist is full"
        );
        return Err(DomainError::CapacityExceeded {
            capacity: waitlist.capacity(),
        });
    }

    let entry_id = unique_id(waitlist, id_provider, max_id_attempts)?;
    let joined_at = time_provider.now_millis();

    let entry = waitlist.push_back(entry_id, joined_at)?.clone();

    info!(
        entry_id = %entry.id,
        position = entry.position,
        len = waitlist.len(),
        "Customer joined waitlist"
    );

    Ok(entry)
}

fn unique_id(
    waitlist: &Waitlist,
    id_provider: &dyn IdProvider,
    max_id_attempts: u32,
) -> Result<String, DomainError> {
    for attempt in 1..=max_id_attempts {
        let candidate = id_provider.generate_id();
        if !waitlist.contains_id(&candidate) {
            return Ok(candidate);
        }
        warn!(
            entry_id = %candidate,
            attempt,
            max_id_attempts,
            "Generated entry ID already in use, regenerating"
        );
    }

    Err(DomainError::IdentifierCollision {
        attempts: max_id_attempts,
    })
}
