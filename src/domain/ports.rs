use async_trait::async_trait;

use super::errors::ProbeError;
use super::models::ProbeDefinition;

/// Transport used to send a key probe to a provider
///
/// Implementations only report what happened on the wire; deciding
/// whether a status means the key is valid belongs to the prober.
#[async_trait]
pub trait ProbeClient: Send + Sync {
    /// Send the probe described by `definition` authenticated with `api_key`
    ///
    /// # Returns
    /// * `Ok(status)` - HTTP status code of the response, whatever it is
    /// * `Err(ProbeError)` - no response was received (timeout, connection failure)
    async fn send_probe(&self, definition: &ProbeDefinition, api_key: &str)
        -> Result<u16, ProbeError>;
}
