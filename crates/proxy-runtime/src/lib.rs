//! # Proxy Runtime
//!
//! Everything around the core: configuration loading, collaborator wiring,
//! and the REST surface that relays the observer envelope to clients.

#![warn(clippy::all)]

pub mod api;
pub mod config;
pub mod wiring;

pub use config::{ConfigError, GeneralSettings, ProxyConfig};
pub use wiring::{build_facade, BootstrapError};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
