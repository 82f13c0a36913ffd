//! CLI argument definitions.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::application::preflight::{DEFAULT_CONFIG_PATH, DEFAULT_ENV_PATH};
use crate::application::PreflightOptions;
use crate::infrastructure::config::Settings;

#[derive(Parser, Debug)]
#[command(name = "litellm-preflight")]
#[command(version)]
#[command(about = "Validate LiteLLM configuration before deployment", long_about = None)]
pub struct Cli {
    /// Path to .env file
    #[arg(long = "env", value_name = "PATH", default_value = DEFAULT_ENV_PATH)]
    pub env: PathBuf,

    /// Path to config.yml file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Test API key validity against the provider APIs
    #[arg(long)]
    pub test_api: bool,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Only use variables from the env file, ignoring the process environment
    #[arg(long)]
    pub isolated: bool,

    /// Seconds to wait for each API key probe
    #[arg(long, value_name = "SECS")]
    pub probe_timeout: Option<u64>,

    /// Settings file for the checker itself
    #[arg(long, value_name = "PATH", env = "LITELLM_PREFLIGHT_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Options for the preflight run
    pub fn options(&self) -> PreflightOptions {
        PreflightOptions {
            env_path: self.env.clone(),
            config_path: self.config.clone(),
            test_api: self.test_api,
            isolated: self.isolated,
        }
    }

    /// Load settings and apply command-line overrides on top
    pub fn load_settings(&self) -> Result<Settings> {
        let mut settings = Settings::load(self.settings.as_deref())?;
        self.apply_overrides(&mut settings);
        settings.validate()?;
        Ok(settings)
    }

    /// Command-line flags have the highest precedence
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(timeout) = self.probe_timeout {
            settings.probe.timeout_secs = timeout;
        }
        if let Some(level) = &self.log_level {
            settings.logging.level.clone_from(level);
        }
    }
}
