//! Preflight run orchestration
//!
//! Runs the phases in order (environment, configuration, optional key
//! probing) and gathers their findings into one report. This is the only
//! place where accumulated findings become an exit code.

use std::path::PathBuf;
use tracing::info;

use crate::domain::models::{EnvironmentMap, ProbeReport, ValidationErrors};
use crate::domain::ports::ProbeClient;
use crate::domain::LoadError;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::env::EnvLoader;
use crate::services::{validate_config, validate_environment, KeyProber};

/// Default environment file
pub const DEFAULT_ENV_PATH: &str = ".env";

/// Default proxy configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config.yml";

/// What to check and where to find it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreflightOptions {
    pub env_path: PathBuf,
    pub config_path: PathBuf,
    /// Probe provider APIs with the configured keys
    pub test_api: bool,
    /// Use only the environment file, not the process environment
    pub isolated: bool,
}

impl Default for PreflightOptions {
    fn default() -> Self {
        Self {
            env_path: PathBuf::from(DEFAULT_ENV_PATH),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            test_api: false,
            isolated: false,
        }
    }
}

/// Environment phase result
#[derive(Debug, Default)]
pub struct EnvPhase {
    /// Set when the file was missing or unreadable and an empty map was used
    pub warning: Option<String>,
    pub errors: ValidationErrors,
}

/// Configuration phase result
#[derive(Debug)]
pub enum ConfigPhase {
    /// The file loaded and was validated
    Checked { errors: ValidationErrors },
    /// The file could not be loaded; validation was skipped
    Unavailable { error: LoadError },
}

impl ConfigPhase {
    /// Issues this phase contributes to the total
    ///
    /// An unavailable file counts as exactly one issue.
    pub fn issues(&self) -> ValidationErrors {
        match self {
            Self::Checked { errors } => errors.clone(),
            Self::Unavailable { error } => ValidationErrors::from(vec![error.config_issue().to_string()]),
        }
    }
}

/// Aggregated outcome of one run
#[derive(Debug)]
pub struct PreflightReport {
    pub environment: EnvPhase,
    pub configuration: ConfigPhase,
    /// Present only when probing was requested
    pub api_keys: Option<ProbeReport>,
}

impl PreflightReport {
    /// Environment issues followed by configuration issues
    pub fn all_errors(&self) -> ValidationErrors {
        let mut all = self.environment.errors.clone();
        all.append(self.configuration.issues());
        all
    }

    pub fn total_issues(&self) -> usize {
        self.all_errors().len()
    }

    pub fn passed(&self) -> bool {
        self.total_issues() == 0
    }

    /// 0 when nothing was found, 1 otherwise. Probe results do not count.
    pub fn exit_code(&self) -> i32 {
        i32::from(!self.passed())
    }
}

/// Runs the preflight phases
pub struct Preflight<C: ProbeClient> {
    prober: KeyProber<C>,
    process_env: Option<EnvironmentMap>,
}

impl<C: ProbeClient> Preflight<C> {
    pub fn new(client: C) -> Self {
        Self {
            prober: KeyProber::new(client),
            process_env: None,
        }
    }

    /// Use `vars` in place of the real process environment
    #[must_use]
    pub fn with_process_env(mut self, vars: EnvironmentMap) -> Self {
        self.process_env = Some(vars);
        self
    }

    pub async fn run(&self, options: &PreflightOptions) -> PreflightReport {
        let (env, environment) = self.check_environment(options);
        let configuration = Self::check_configuration(options, &env);

        let api_keys = if options.test_api {
            Some(self.prober.probe_all(&env).await)
        } else {
            None
        };

        let report = PreflightReport {
            environment,
            configuration,
            api_keys,
        };
        info!(total_issues = report.total_issues(), "preflight finished");
        report
    }

    fn check_environment(&self, options: &PreflightOptions) -> (EnvironmentMap, EnvPhase) {
        let mut loader = EnvLoader::new(&options.env_path);
        if options.isolated {
            loader = loader.isolated();
        } else if let Some(vars) = &self.process_env {
            loader = loader.with_process_env(vars.clone());
        }

        let (env, warning) = match loader.load() {
            Ok(env) => (env, None),
            Err(err) => {
                let warning = match &err {
                    LoadError::NotFound { path } => format!("{} file not found", path.display()),
                    other => other.to_string(),
                };
                info!(error = %err, "continuing with an empty environment");
                (EnvironmentMap::new(), Some(warning))
            }
        };

        let errors = validate_environment(&env);
        (env, EnvPhase { warning, errors })
    }

    fn check_configuration(options: &PreflightOptions, env: &EnvironmentMap) -> ConfigPhase {
        match ConfigLoader::load_from_file(&options.config_path) {
            Ok(document) => ConfigPhase::Checked {
                errors: validate_config(&document, env),
            },
            Err(error) => {
                info!(error = %error, "skipping configuration checks");
                ConfigPhase::Unavailable { error }
            }
        }
    }
}
