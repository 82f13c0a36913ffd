//! Configuration loading
//!
//! - `loader`: the proxy's YAML configuration file under inspection
//! - `settings`: the checker's own settings, merged with figment from
//!   defaults, an optional YAML file and `LITELLM_PREFLIGHT_*` variables

pub mod loader;
pub mod settings;

pub use loader::ConfigLoader;
pub use settings::{ProbeSettings, Settings, SettingsError, SETTINGS_ENV_PREFIX};
