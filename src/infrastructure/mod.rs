//! Infrastructure layer module
//!
//! Adapters for everything outside the process:
//! - Environment file loading (dotenvy)
//! - Proxy configuration loading (serde_yaml) and tool settings (figment)
//! - Logging infrastructure
//! - Provider HTTP client for key probing
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod env;
pub mod logging;
pub mod providers;
