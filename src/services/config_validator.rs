//! Structural checks on the proxy configuration and its environment references.

use serde_yaml::Value;
use tracing::debug;

use crate::domain::models::config_document::{env_reference, is_truthy, sequence_items};
use crate::domain::models::{ConfigDocument, EnvironmentMap, ModelEntry, ValidationErrors};

/// Validate the configuration file against the loaded environment
///
/// Rules, in reporting order:
/// 1. the root must be a mapping
/// 2. `model_list` must hold at least one entry; each entry needs
///    `litellm_params.model` and any `os.environ/` api_key must resolve
/// 3. an `os.environ/` `general_settings.master_key` must resolve
pub fn validate_config(config: &ConfigDocument, env: &EnvironmentMap) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if !config.has_mapping_root() {
        errors.push("Configuration root must be a mapping");
    }

    validate_model_list(config.model_list(), env, &mut errors);
    validate_master_key(config.master_key(), env, &mut errors);

    errors
}

fn validate_model_list(model_list: Option<&Value>, env: &EnvironmentMap, errors: &mut ValidationErrors) {
    let Some(model_list) = model_list.filter(|list| is_truthy(list)) else {
        errors.push("No models defined in configuration");
        return;
    };

    let Some(entries) = sequence_items(model_list) else {
        errors.push("'model_list' must be a list of model entries");
        return;
    };

    debug!(count = entries.len(), "validating model entries");
    for (idx, node) in entries.iter().enumerate() {
        let entry = ModelEntry::new(idx + 1, node);
        let name = entry.display_name();

        if !entry.model().is_some_and(is_truthy) {
            errors.push(format!("Model '{name}' is missing required 'model' parameter"));
        }

        if let Some(key) = entry.api_key().and_then(env_reference) {
            if !env.is_set(key) {
                errors.push(format!(
                    "Model '{name}' references undefined environment variable '{key}'"
                ));
            }
        }
    }
}

fn validate_master_key(master_key: Option<&Value>, env: &EnvironmentMap, errors: &mut ValidationErrors) {
    let Some(master_key) = master_key else {
        return;
    };

    if let Some(key) = env_reference(master_key) {
        if !env.is_set(key) {
            errors.push(format!(
                "Master key references undefined environment variable '{key}'"
            ));
        }
    }
}
