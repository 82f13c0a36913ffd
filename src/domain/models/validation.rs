//! Accumulated validation findings.

use serde::Serialize;

/// Ordered list of human-readable validation errors.
///
/// Validators never fail; they push every problem they find onto one of
/// these and keep going. Order of insertion is the order of discovery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one error
    pub fn push(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
    }

    /// Move every error of `other` to the end of this list
    pub fn append(&mut self, other: Self) {
        self.errors.extend(other.errors);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Errors in the order they were recorded
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(String::as_str)
    }

    /// Whether any recorded error equals `error`
    pub fn contains(&self, error: &str) -> bool {
        self.errors.iter().any(|e| e == error)
    }

    /// Consume the list, keeping order
    pub fn into_vec(self) -> Vec<String> {
        self.errors
    }
}

impl From<Vec<String>> for ValidationErrors {
    fn from(errors: Vec<String>) -> Self {
        Self { errors }
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
