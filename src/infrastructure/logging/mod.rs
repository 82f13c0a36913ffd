//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Pretty, compact or JSON formatting on stderr
//! - Secret scrubbing for provider responses

pub mod config;
pub mod logger;
pub mod secret_scrubbing;

pub use config::{LogConfig, LogFormat};
pub use logger::LoggerImpl;
pub use secret_scrubbing::SecretScrubber;
