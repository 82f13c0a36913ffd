pub mod preflight;

pub use preflight::{ConfigPhase, EnvPhase, Preflight, PreflightOptions, PreflightReport};
