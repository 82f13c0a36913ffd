//! Domain layer for the preflight checker
//!
//! Plain data models, error types and the ports the infrastructure
//! layer implements.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{LoadError, ProbeError};
