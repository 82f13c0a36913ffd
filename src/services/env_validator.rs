//! Checks on the loaded environment variables.

use crate::domain::models::{EnvironmentMap, Provider, ValidationErrors};

/// Variable holding the proxy's admin key
pub const MASTER_KEY_VAR: &str = "MASTER_KEY";

/// Database password variable, checked only when present
pub const DB_PASSWORD_VAR: &str = "DB_PASSWORD";

/// Shortest acceptable `DB_PASSWORD`, in characters
pub const MIN_DB_PASSWORD_LEN: usize = 10;

/// Validate required environment variables
///
/// Every check runs regardless of the others; all findings are returned.
pub fn validate_environment(env: &EnvironmentMap) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if !env.is_set(MASTER_KEY_VAR) {
        errors.push(format!("{MASTER_KEY_VAR} is required but not set"));
    }

    if !Provider::ALL.iter().any(|p| env.is_set(p.key_var())) {
        errors.push("No API keys set. At least one provider API key is required");
    }

    if let Some(password) = env.get(DB_PASSWORD_VAR) {
        if password.chars().count() < MIN_DB_PASSWORD_LEN {
            errors.push(format!(
                "{DB_PASSWORD_VAR} should be at least {MIN_DB_PASSWORD_LEN} characters long for security"
            ));
        }
    }

    errors
}
