// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Waitlist is full (capacity: {capacity})")]
    CapacityExceeded { capacity: usize },

    #[error("Entry ID already in the waitlist: {id}")]
    DuplicateId { id: String },

    #[error("Could not generate a unique entry ID after {attempts} attempts")]
    IdentifierCollision { attempts: u32 },
}

pub type Result<T> = std::result::Result<T, DomainError>;
