//! HTTP implementation of the probe port
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::domain::models::{AuthScheme, ProbeDefinition, Provider};
use crate::domain::ports::ProbeClient;
use crate::domain::ProbeError;
use crate::infrastructure::config::ProbeSettings;
use crate::infrastructure::logging::SecretScrubber;

/// Longest slice of a response body kept in debug logs
const MAX_LOGGED_BODY: usize = 200;

/// Configuration for the probe HTTP client
#[derive(Debug, Clone)]
pub struct HttpProbeClientConfig {
    /// Per-request timeout
    pub timeout_secs: u64,
    pub anthropic_base_url: String,
    pub openai_base_url: String,
    pub groq_base_url: String,
}

impl Default for HttpProbeClientConfig {
    fn default() -> Self {
        Self::from(&ProbeSettings::default())
    }
}

impl From<&ProbeSettings> for HttpProbeClientConfig {
    fn from(settings: &ProbeSettings) -> Self {
        Self {
            timeout_secs: settings.timeout_secs,
            anthropic_base_url: settings.anthropic_base_url.clone(),
            openai_base_url: settings.openai_base_url.clone(),
            groq_base_url: settings.groq_base_url.clone(),
        }
    }
}

impl HttpProbeClientConfig {
    /// Point every provider at the same base URL (mock servers in tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            anthropic_base_url: base_url.clone(),
            openai_base_url: base_url.clone(),
            groq_base_url: base_url,
            ..Self::default()
        }
    }

    fn base_url(&self, provider: Provider) -> Option<&str> {
        match provider {
            Provider::Anthropic => Some(&self.anthropic_base_url),
            Provider::OpenAi => Some(&self.openai_base_url),
            Provider::Groq => Some(&self.groq_base_url),
            Provider::DeepSeek | Provider::Codestral | Provider::OpenRouter => None,
        }
    }
}

/// Sends one-token chat requests to provider endpoints
///
/// No retries: one request per probe, bounded by the configured timeout.
pub struct HttpProbeClient {
    http_client: ReqwestClient,
    config: HttpProbeClientConfig,
    scrubber: SecretScrubber,
}

impl HttpProbeClient {
    pub fn new(config: HttpProbeClientConfig) -> Result<Self> {
        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http_client,
            config,
            scrubber: SecretScrubber::new(),
        })
    }

    fn endpoint(&self, definition: &ProbeDefinition) -> Result<String, ProbeError> {
        let base_url = self.config.base_url(definition.provider).ok_or_else(|| {
            ProbeError::Transport(format!("no endpoint configured for {}", definition.provider))
        })?;
        Ok(format!("{}{}", base_url.trim_end_matches('/'), definition.path))
    }
}

#[async_trait]
impl ProbeClient for HttpProbeClient {
    #[instrument(skip(self, api_key), fields(provider = %definition.provider))]
    async fn send_probe(
        &self,
        definition: &ProbeDefinition,
        api_key: &str,
    ) -> Result<u16, ProbeError> {
        let url = self.endpoint(definition)?;

        let request = self
            .http_client
            .post(&url)
            .header("content-type", "application/json")
            .json(&definition.request_body());

        let request = match definition.auth {
            AuthScheme::AnthropicKey { version } => request
                .header("x-api-key", api_key)
                .header("anthropic-version", version),
            AuthScheme::Bearer => request.bearer_auth(api_key),
        };

        let response = request.send().await.map_err(|err| {
            if err.is_timeout() {
                ProbeError::Timeout
            } else {
                ProbeError::Transport(self.scrubber.scrub_message(&err.to_string()))
            }
        })?;

        let status = response.status().as_u16();
        if !definition.accepts(status) {
            let body = response.text().await.unwrap_or_default();
            let body: String = body.chars().take(MAX_LOGGED_BODY).collect();
            debug!(
                status,
                body = %self.scrubber.scrub_message(&body),
                "probe rejected"
            );
        }

        Ok(status)
    }
}
