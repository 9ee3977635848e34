//! Guichet Core - shared foundation for the admin console
//!
//! Defines the error taxonomy, logging setup, configuration and the data
//! records exchanged with the remote backend.

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use config::*;
pub use error::*;
pub use logging::*;
pub use types::*;

// Re-export commonly used external types
pub use tracing;
