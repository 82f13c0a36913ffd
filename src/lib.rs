//! LiteLLM Preflight - configuration checker for LiteLLM proxy deployments
//!
//! Reads a dotenv-style environment file and the proxy's `config.yml`,
//! reports missing required settings and unresolved `os.environ/` references,
//! and can optionally probe provider APIs to confirm keys are live.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): data models, error types and ports
//! - **Service Layer** (`services`): environment/config validation and key probing
//! - **Application Layer** (`application`): orchestration of a preflight run
//! - **Infrastructure Layer** (`infrastructure`): file loaders, settings, logging, HTTP
//! - **CLI Layer** (`cli`): argument parsing and report rendering
//!
//! # Example
//!
//! ```ignore
//! use litellm_preflight::application::{Preflight, PreflightOptions};
//! use litellm_preflight::infrastructure::providers::{HttpProbeClient, HttpProbeClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = HttpProbeClient::new(HttpProbeClientConfig::default())?;
//!     let report = Preflight::new(client).run(&PreflightOptions::default()).await;
//!     std::process::exit(report.exit_code());
//! }
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use application::{ConfigPhase, EnvPhase, Preflight, PreflightOptions, PreflightReport};
pub use domain::models::{
    ConfigDocument, EnvironmentMap, ProbeReport, ProbeStatus, Provider, ValidationErrors,
};
pub use domain::ports::ProbeClient;
pub use domain::{LoadError, ProbeError};
pub use infrastructure::config::{ConfigLoader, Settings};
pub use infrastructure::env::EnvLoader;
pub use services::{validate_config, validate_environment, KeyProber};
