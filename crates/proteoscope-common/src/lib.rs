//! proteoscope-common — Shared errors, configuration and the outbound HTTP
//! client used across all Proteoscope crates.

pub mod client;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use client::AllowlistClient;
pub use config::AppConfig;
pub use error::{ProteoscopeError, Result};
