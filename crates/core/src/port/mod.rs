// Port Layer - Interfaces for external dependencies

pub mod id_provider; // For deterministic testing
pub mod time_provider;

// Re-exports
pub use id_provider::{IdProvider, SequentialIdProvider, UuidProvider};
pub use time_provider::{SystemTimeProvider, TimeProvider};
