//! Environment variable mapping consumed by the validators and the prober.

use serde::Serialize;
use std::collections::HashMap;

/// Case-sensitive mapping of environment variable names to values.
///
/// Built once by the environment loader and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EnvironmentMap {
    vars: HashMap<String, String>,
}

impl EnvironmentMap {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value of a variable, if present (possibly empty)
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Whether the variable is present at all, even with an empty value
    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// Whether the variable is present and non-empty
    pub fn is_set(&self, key: &str) -> bool {
        self.get(key).is_some_and(|value| !value.is_empty())
    }

    /// Non-empty value of a variable
    pub fn value(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|value| !value.is_empty())
    }

    /// Number of variables, empty ones included
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether no variables are present
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// All variables, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Return a new mapping where entries from `overrides` replace ours.
    pub fn overlay<I, K, V>(&self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut vars = self.vars.clone();
        vars.extend(
            overrides
                .into_iter()
                .map(|(k, v)| (k.into(), v.into())),
        );
        Self { vars }
    }
}

impl<K, V> FromIterator<(K, V)> for EnvironmentMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_set_requires_non_empty_value() {
        let env: EnvironmentMap = [("A", "1"), ("B", "")].into_iter().collect();

        assert!(env.is_set("A"));
        assert!(!env.is_set("B"));
        assert!(env.contains("B"));
        assert!(!env.is_set("C"));
        assert_eq!(env.value("B"), None);
        assert_eq!(env.get("B"), Some(""));
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let env: EnvironmentMap = [("MASTER_KEY", "x")].into_iter().collect();
        assert!(env.is_set("MASTER_KEY"));
        assert!(!env.is_set("master_key"));
    }

    #[test]
    fn test_overlay_returns_new_map() {
        let base: EnvironmentMap = [("A", "file"), ("B", "file")].into_iter().collect();
        let merged = base.overlay([("B", "process"), ("C", "process")]);

        assert_eq!(merged.get("A"), Some("file"));
        assert_eq!(merged.get("B"), Some("process"));
        assert_eq!(merged.get("C"), Some("process"));
        assert_eq!(base.get("B"), Some("file"), "base must stay untouched");
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn test_len_counts_empty_values() {
        assert!(EnvironmentMap::new().is_empty());

        let env: EnvironmentMap = [("A", "1"), ("B", "")].into_iter().collect();
        assert_eq!(env.len(), 2);
        assert!(!env.is_empty());

        let mut pairs: Vec<_> = env.iter().collect();
        pairs.sort_unstable();
        assert_eq!(pairs, vec![("A", "1"), ("B", "")]);
    }
}
