//! Outcome of live API key probing.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

use super::provider::Provider;

/// Classification of one provider key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStatus {
    /// The provider authenticated the key
    Valid,
    /// Rejected, unreachable or timed out
    Invalid,
    /// Key present but no probe exists for this provider
    Untested,
}

impl fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Valid => "VALID",
            Self::Invalid => "INVALID",
            Self::Untested => "UNTESTED",
        };
        f.write_str(label)
    }
}

/// Probe results keyed by provider, in the order they were probed.
///
/// Providers whose key is absent have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeReport {
    entries: Vec<(Provider, ProbeStatus)>,
}

impl ProbeReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a result, replacing any earlier one for the same provider
    pub fn record(&mut self, provider: Provider, status: ProbeStatus) {
        match self.entries.iter_mut().find(|(p, _)| *p == provider) {
            Some(entry) => entry.1 = status,
            None => self.entries.push((provider, status)),
        }
    }

    /// Result recorded for `provider`, if its key was present
    pub fn get(&self, provider: Provider) -> Option<ProbeStatus> {
        self.entries
            .iter()
            .find(|(p, _)| *p == provider)
            .map(|(_, status)| *status)
    }

    /// Results in probe order
    pub fn iter(&self) -> impl Iterator<Item = (Provider, ProbeStatus)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of providers with a result
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ProbeReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (provider, status) in &self.entries {
            map.serialize_entry(provider.id(), status)?;
        }
        map.end()
    }
}
