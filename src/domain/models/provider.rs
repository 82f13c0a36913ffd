//! LLM providers known to the checker and their probe definitions.

use serde::Serialize;
use std::fmt;

/// Upstream LLM vendor addressed through an API key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Anthropic,
    OpenAi,
    Groq,
    DeepSeek,
    Codestral,
    OpenRouter,
}

impl Provider {
    /// Every provider, in probing order: probeable ones first.
    pub const ALL: [Self; 6] = [
        Self::Anthropic,
        Self::OpenAi,
        Self::Groq,
        Self::DeepSeek,
        Self::Codestral,
        Self::OpenRouter,
    ];

    /// Short lowercase identifier used in reports
    pub const fn id(self) -> &'static str {
        match self {
            Self::Anthropic => "anthropic",
            Self::OpenAi => "openai",
            Self::Groq => "groq",
            Self::DeepSeek => "deepseek",
            Self::Codestral => "codestral",
            Self::OpenRouter => "openrouter",
        }
    }

    /// Environment variable holding this provider's API key
    pub const fn key_var(self) -> &'static str {
        match self {
            Self::Anthropic => "ANTHROPIC_API_KEY",
            Self::OpenAi => "OPENAI_API_KEY",
            Self::Groq => "GROQ_API_KEY",
            Self::DeepSeek => "DEEPSEEK_API_KEY",
            Self::Codestral => "CODESTRAL_API_KEY",
            Self::OpenRouter => "OPENROUTER_API_KEY",
        }
    }

    /// How to check a key against the live API, if we know how.
    pub const fn probe_definition(self) -> Option<ProbeDefinition> {
        match self {
            Self::Anthropic => Some(ProbeDefinition {
                provider: self,
                path: "/v1/messages",
                model: "claude-3-haiku-20240307",
                auth: AuthScheme::AnthropicKey {
                    version: "2023-06-01",
                },
                success_status: 200,
            }),
            Self::OpenAi => Some(ProbeDefinition {
                provider: self,
                path: "/v1/chat/completions",
                model: "gpt-3.5-turbo",
                auth: AuthScheme::Bearer,
                success_status: 200,
            }),
            Self::Groq => Some(ProbeDefinition {
                provider: self,
                path: "/v1/chat/completions",
                model: "llama-3.1-8b-instant",
                auth: AuthScheme::Bearer,
                success_status: 200,
            }),
            Self::DeepSeek | Self::Codestral | Self::OpenRouter => None,
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// How the API key is presented to the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// `x-api-key` plus a pinned `anthropic-version` header
    AnthropicKey { version: &'static str },
    /// `Authorization: Bearer <key>`
    Bearer,
}

/// Minimal request that proves a key is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeDefinition {
    pub provider: Provider,
    /// Path appended to the provider's base URL
    pub path: &'static str,
    /// Cheapest chat model to address
    pub model: &'static str,
    pub auth: AuthScheme,
    pub success_status: u16,
}

impl ProbeDefinition {
    /// Status returned when the key authenticated but the request was rejected.
    pub const BAD_REQUEST_STATUS: u16 = 400;

    /// Whether `status` shows the key was accepted.
    pub const fn accepts(&self, status: u16) -> bool {
        status == self.success_status || status == Self::BAD_REQUEST_STATUS
    }

    /// One-token chat request body
    pub fn request_body(&self) -> serde_json::Value {
        serde_json::json!({
            "model": self.model,
            "max_tokens": 1,
            "messages": [{ "role": "user", "content": "Hello" }],
        })
    }
}
