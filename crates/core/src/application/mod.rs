// Application Layer - Use Cases and Session State

pub mod registration;
pub mod session;
pub mod view;
pub mod waitlist;

// Re-exports
pub use registration::RegistrationDialog;
pub use session::{Intent, IntentOutcome, WaitlistSession};
pub use view::{QueueView, RowView};
pub use waitlist::QueueEngine;
