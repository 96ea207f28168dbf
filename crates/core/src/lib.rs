// FastQueue Core - Waitlist Domain Logic & Ports
// NO infrastructure dependencies (hexagonal: ports in, views out)

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;

pub use config::{EngineConfig, IdStrategy};
pub use error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
