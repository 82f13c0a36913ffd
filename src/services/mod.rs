pub mod config_validator;
pub mod env_validator;
pub mod key_prober;

pub use config_validator::validate_config;
pub use env_validator::validate_environment;
pub use key_prober::KeyProber;
