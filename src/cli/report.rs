//! Human and JSON rendering of a preflight report.

use serde_json::json;

use crate::application::{ConfigPhase, PreflightReport};
use crate::cli::display::{self, Tone};
use crate::cli::output::CommandOutput;
use crate::domain::models::{ProbeStatus, ValidationErrors};
use crate::domain::LoadError;

const TITLE: &str = "LiteLLM Configuration Validator";

impl CommandOutput for PreflightReport {
    fn to_human(&self) -> String {
        let mut lines = vec![display::banner(TITLE), String::new()];

        lines.push(display::section_header("Checking environment variables..."));
        if let Some(warning) = &self.environment.warning {
            lines.push(display::warning(warning));
        }
        push_phase(&mut lines, "Environment variables", &self.environment.errors);

        lines.push(String::new());
        lines.push(display::section_header("Checking configuration file..."));
        match &self.configuration {
            ConfigPhase::Checked { errors } => push_phase(&mut lines, "Configuration file", errors),
            ConfigPhase::Unavailable { error } => {
                lines.push(display::failure(&load_error_message(error)));
                lines.push(display::status_line(
                    "Configuration file",
                    error.status_label(),
                    Tone::Failure,
                ));
            }
        }

        if let Some(api_keys) = &self.api_keys {
            lines.push(String::new());
            lines.push(display::section_header("Testing API keys..."));
            for (provider, status) in api_keys.iter() {
                let tone = match status {
                    ProbeStatus::Valid => Tone::Success,
                    ProbeStatus::Invalid => Tone::Failure,
                    ProbeStatus::Untested => Tone::Warning,
                };
                let label = format!("{} API key", provider.id().to_uppercase());
                lines.push(display::status_line(&label, &status.to_string(), tone));
            }
        }

        lines.push(String::new());
        let total = self.total_issues();
        if total == 0 {
            lines.push(display::summary_success(
                "All checks passed! Your configuration looks valid.",
            ));
        } else {
            lines.push(display::summary_failure(&format!(
                "Found {total} issues with your configuration."
            )));
        }

        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        let configuration = match &self.configuration {
            ConfigPhase::Checked { errors } => json!({
                "status": "checked",
                "passed": errors.is_empty(),
                "errors": errors,
            }),
            ConfigPhase::Unavailable { error } => json!({
                "status": config_status_key(error),
                "passed": false,
                "detail": error.to_string(),
                "errors": self.configuration.issues(),
            }),
        };

        json!({
            "environment": {
                "warning": self.environment.warning,
                "passed": self.environment.errors.is_empty(),
                "errors": self.environment.errors,
            },
            "configuration": configuration,
            "api_keys": self.api_keys,
            "total_issues": self.total_issues(),
            "passed": self.passed(),
        })
    }
}

fn push_phase(lines: &mut Vec<String>, label: &str, errors: &ValidationErrors) {
    if errors.is_empty() {
        lines.push(display::status_line(label, "PASSED", Tone::Success));
    } else {
        lines.push(display::status_line(label, "FAILED", Tone::Failure));
        lines.extend(errors.iter().map(display::error_item));
    }
}

fn load_error_message(error: &LoadError) -> String {
    match error {
        LoadError::NotFound { .. } => format!("Error: {error}"),
        LoadError::Io { .. } | LoadError::Parse { .. } => error.to_string(),
    }
}

const fn config_status_key(error: &LoadError) -> &'static str {
    match error {
        LoadError::NotFound { .. } => "not_found",
        LoadError::Io { .. } => "unreadable",
        LoadError::Parse { .. } => "invalid",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::EnvPhase;
    use crate::domain::models::{ProbeReport, Provider};
    use std::path::PathBuf;

    fn plain(text: &str) -> String {
        console::strip_ansi_codes(text).to_string()
    }

    fn clean_report() -> PreflightReport {
        PreflightReport {
            environment: EnvPhase::default(),
            configuration: ConfigPhase::Checked {
                errors: ValidationErrors::new(),
            },
            api_keys: None,
        }
    }

    #[test]
    fn test_human_output_for_clean_run() {
        let text = plain(&clean_report().to_human());

        assert!(text.starts_with("LiteLLM Configuration Validator\n==============================="));
        assert!(text.contains("Checking environment variables..."));
        assert!(text.contains("[PASSED]"));
        assert!(!text.contains("Testing API keys..."));
        assert!(text.ends_with("All checks passed! Your configuration looks valid."));
    }

    #[test]
    fn test_human_output_lists_each_error() {
        let mut report = clean_report();
        report.environment.warning = Some(".env file not found".to_string());
        report.environment.errors.push("MASTER_KEY is required but not set");
        report.configuration = ConfigPhase::Unavailable {
            error: LoadError::NotFound {
                path: PathBuf::from("config.yml"),
            },
        };

        let text = plain(&report.to_human());
        assert!(text.contains("Warning: .env file not found"));
        assert!(text.contains(" - MASTER_KEY is required but not set"));
        assert!(text.contains("Error: config.yml not found"));
        assert!(text.contains("[NOT FOUND]"));
        assert!(text.contains("Found 2 issues with your configuration."));
    }

    #[test]
    fn test_human_output_for_api_keys() {
        let mut probes = ProbeReport::new();
        probes.record(Provider::Anthropic, ProbeStatus::Valid);
        probes.record(Provider::OpenRouter, ProbeStatus::Untested);
        let mut report = clean_report();
        report.api_keys = Some(probes);

        let text = plain(&report.to_human());
        assert!(text.contains("Testing API keys..."));
        let anthropic = text.lines().find(|l| l.starts_with("ANTHROPIC API key")).unwrap();
        assert!(anthropic.ends_with("[VALID]"));
        let openrouter = text.lines().find(|l| l.starts_with("OPENROUTER API key")).unwrap();
        assert!(openrouter.ends_with("[UNTESTED]"));
    }

    #[test]
    fn test_json_output() {
        let mut report = clean_report();
        report.configuration = ConfigPhase::Unavailable {
            error: LoadError::Parse {
                path: PathBuf::from("config.yml"),
                message: "bad indentation".to_string(),
            },
        };

        let json = report.to_json();
        assert_eq!(json["passed"], false);
        assert_eq!(json["total_issues"], 1);
        assert_eq!(json["configuration"]["status"], "invalid");
        assert_eq!(
            json["configuration"]["errors"],
            serde_json::json!(["Config file could not be parsed"])
        );
        assert_eq!(json["environment"]["errors"], serde_json::json!([]));
        assert!(json["api_keys"].is_null());
    }
}
