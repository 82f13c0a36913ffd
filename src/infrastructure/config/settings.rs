use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::infrastructure::logging::LogConfig;

/// Prefix for environment overrides of the tool's own settings
pub const SETTINGS_ENV_PREFIX: &str = "LITELLM_PREFLIGHT_";

/// Settings error types
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Invalid probe timeout: {0}. Must be at least 1 second")]
    InvalidProbeTimeout(u64),

    #[error("Invalid base URL for {provider}: {url}. Must start with http:// or https://")]
    InvalidBaseUrl { provider: &'static str, url: String },

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Settings of the checker itself (not of the proxy being checked)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub probe: ProbeSettings,

    #[serde(default)]
    pub logging: LogConfig,
}

/// Live key probing settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeSettings {
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_anthropic_base_url")]
    pub anthropic_base_url: String,

    #[serde(default = "default_openai_base_url")]
    pub openai_base_url: String,

    #[serde(default = "default_groq_base_url")]
    pub groq_base_url: String,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            anthropic_base_url: default_anthropic_base_url(),
            openai_base_url: default_openai_base_url(),
            groq_base_url: default_groq_base_url(),
        }
    }
}

const fn default_timeout_secs() -> u64 {
    5
}

fn default_anthropic_base_url() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_openai_base_url() -> String {
    "https://api.openai.com".to_string()
}

fn default_groq_base_url() -> String {
    "https://api.groq.com/openai".to_string()
}

impl Settings {
    /// Load settings with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. Optional settings YAML file
    /// 3. Environment variables (LITELLM_PREFLIGHT_* prefix, `__` nests)
    ///
    /// Command-line overrides are applied by the caller afterwards.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = file {
            if !path.exists() {
                anyhow::bail!("Settings file not found: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }

        let settings: Self = figment
            .merge(Env::prefixed(SETTINGS_ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract settings")?;

        settings.validate()?;
        Ok(settings)
    }

    /// Validate settings after loading or overriding
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.probe.timeout_secs == 0 {
            return Err(SettingsError::InvalidProbeTimeout(self.probe.timeout_secs));
        }

        let urls = [
            ("anthropic", &self.probe.anthropic_base_url),
            ("openai", &self.probe.openai_base_url),
            ("groq", &self.probe.groq_base_url),
        ];
        for (provider, url) in urls {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(SettingsError::InvalidBaseUrl {
                    provider,
                    url: url.clone(),
                });
            }
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(SettingsError::InvalidLogLevel(self.logging.level.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::logging::LogFormat;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.probe.timeout_secs, 5);
        assert_eq!(settings.probe.groq_base_url, "https://api.groq.com/openai");
        assert_eq!(settings.logging.level, "warn");
        settings.validate().expect("Default settings should be valid");
    }

    #[test]
    fn test_yaml_file_overrides_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "probe:\n  timeout_secs: 12\nlogging:\n  level: debug\n  format: json"
        )
        .unwrap();
        file.flush().unwrap();

        // Hold temp-env's lock so the env override test cannot interleave
        let settings = temp_env::with_var_unset("LITELLM_PREFLIGHT_PROBE__TIMEOUT_SECS", || {
            Settings::load(Some(file.path())).unwrap()
        });
        assert_eq!(settings.probe.timeout_secs, 12);
        assert_eq!(
            settings.probe.openai_base_url, "https://api.openai.com",
            "Default should persist when not overridden"
        );
        assert_eq!(settings.logging.level, "debug");
        assert_eq!(settings.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_env_overrides_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "probe:\n  timeout_secs: 12").unwrap();
        file.flush().unwrap();

        temp_env::with_var("LITELLM_PREFLIGHT_PROBE__TIMEOUT_SECS", Some("30"), || {
            let settings = Settings::load(Some(file.path())).unwrap();
            assert_eq!(settings.probe.timeout_secs, 30, "Env should win");
        });
    }

    #[test]
    fn test_missing_settings_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = Settings::load(Some(&dir.path().join("missing.yml")));
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let mut settings = Settings::default();
        settings.probe.timeout_secs = 0;

        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidProbeTimeout(0))
        ));
    }

    #[test]
    fn test_validate_bad_base_url() {
        let mut settings = Settings::default();
        settings.probe.openai_base_url = "api.openai.com".to_string();

        match settings.validate() {
            Err(SettingsError::InvalidBaseUrl { provider, url }) => {
                assert_eq!(provider, "openai");
                assert_eq!(url, "api.openai.com");
            }
            other => panic!("Expected InvalidBaseUrl error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let mut settings = Settings::default();
        settings.logging.level = "loud".to_string();

        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidLogLevel(level)) if level == "loud"
        ));
    }
}
