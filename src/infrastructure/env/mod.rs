//! Environment file loading
//!
//! Reads dotenv-style files and merges them with the process environment
//! into an immutable `EnvironmentMap`. The process environment itself is
//! never modified.

pub mod loader;
mod references;

pub use loader::{process_environment, EnvLoader};
