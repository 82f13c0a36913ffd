//! Live API key probing across providers.

use tracing::{debug, info};

use crate::domain::models::{EnvironmentMap, ProbeDefinition, ProbeReport, ProbeStatus, Provider};
use crate::domain::ports::ProbeClient;
use crate::domain::ProbeError;

/// Probes every provider whose key is set, one request at a time
pub struct KeyProber<C: ProbeClient> {
    client: C,
}

impl<C: ProbeClient> KeyProber<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Probe all providers with a non-empty key, in `Provider::ALL` order
    ///
    /// Providers without a probe definition are marked untested without any
    /// network call. A failed probe never aborts the remaining ones.
    pub async fn probe_all(&self, env: &EnvironmentMap) -> ProbeReport {
        let mut report = ProbeReport::new();

        for provider in Provider::ALL {
            let Some(api_key) = env.value(provider.key_var()) else {
                continue;
            };

            let status = match provider.probe_definition() {
                Some(definition) => {
                    let outcome = self.client.send_probe(&definition, api_key).await;
                    classify(&definition, &outcome)
                }
                None => ProbeStatus::Untested,
            };

            info!(provider = %provider, status = %status, "probed API key");
            report.record(provider, status);
        }

        report
    }
}

/// Map a probe outcome to a key status
///
/// The success status and 400 both mean the key authenticated; anything
/// else, including no response at all, counts as invalid.
pub fn classify(definition: &ProbeDefinition, outcome: &Result<u16, ProbeError>) -> ProbeStatus {
    match outcome {
        Ok(status) if definition.accepts(*status) => ProbeStatus::Valid,
        Ok(status) => {
            debug!(provider = %definition.provider, status, "API key rejected");
            ProbeStatus::Invalid
        }
        Err(err) => {
            debug!(provider = %definition.provider, error = %err, "API key probe failed");
            ProbeStatus::Invalid
        }
    }
}
