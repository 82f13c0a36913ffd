pub mod config_document;
pub mod environment;
pub mod probe;
pub mod provider;
pub mod validation;

pub use config_document::{ConfigDocument, ModelEntry, ENV_REFERENCE_PREFIX};
pub use environment::EnvironmentMap;
pub use probe::{ProbeReport, ProbeStatus};
pub use provider::{AuthScheme, ProbeDefinition, Provider};
pub use validation::ValidationErrors;
