//! Completion gateway port
//!
//! Defines the interface for the external text-completion service used to
//! rank shortlisted artists. Implementations (adapters) live in the
//! infrastructure layer.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during completion gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout")]
    Timeout,

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// A single completion request.
///
/// Ranking wants deterministic-leaning output, so the default temperature
/// is low. No retry or deadline is attached here; both are caller concerns.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub prompt: String,
    pub system_prompt: Option<String>,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system_prompt: None,
            temperature: 0.2,
            max_tokens: 1024,
        }
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(system_prompt.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// Gateway to the text-completion service
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Send a prompt and return the model's raw text response.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError>;
}
