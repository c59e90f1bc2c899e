//! OpenAI Provider Implementation
//!
//! Blocking client for OpenAI-compatible chat completion endpoints.
//!
//! # Features
//!
//! - One request per call, no retries
//! - Configurable endpoint (for proxies, compatible servers and tests)
//! - Status codes mapped onto [`LlmError`] variants
//!
//! # Examples
//!
//! ```no_run
//! use persona_llm::OpenAiProvider;
//!
//! let provider = OpenAiProvider::new(std::env::var("OPENAI_API_KEY").ok()).unwrap();
//! ```

use crate::LlmError;
use persona_domain::traits::LlmProvider as LlmProviderTrait;
use persona_domain::CompletionRequest;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default chat completions endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Default timeout for completion requests (2 minutes)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// OpenAI chat completions provider
///
/// Owns a single-threaded tokio runtime and blocks on each request, so it
/// must not be called from inside another async runtime.
pub struct OpenAiProvider {
    endpoint: String,
    api_key: Option<String>,
    client: reqwest::Client,
    runtime: tokio::runtime::Runtime,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiProvider {
    /// Create a provider for the default OpenAI endpoint
    ///
    /// A missing key is accepted here; every call then fails with
    /// [`LlmError::MissingApiKey`].
    pub fn new(api_key: Option<String>) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| LlmError::Other(format!("Failed to build HTTP client: {}", e)))?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| LlmError::Other(format!("Failed to create runtime: {}", e)))?;

        Ok(Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: api_key.filter(|k| !k.is_empty()),
            client,
            runtime,
        })
    }

    /// Point the provider at a different chat completions URL
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Whether an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Send one chat completion request
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - No API key is configured
    /// - The endpoint rejects the key or rate-limits the request
    /// - Network communication fails
    /// - The response has no completion text
    pub async fn complete_async(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let body = ChatRequest {
            model: &request.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        debug!(
            "Sending completion request to {} (model {}, prompt {} chars)",
            self.endpoint,
            request.model,
            request.user.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(match status {
                reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                    LlmError::Unauthorized(error_text)
                }
                reqwest::StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimitExceeded,
                _ => LlmError::Communication(format!("HTTP {}: {}", status, error_text)),
            });
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        chat.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| LlmError::InvalidResponse("Response contained no choices".to_string()))
    }
}

impl LlmProviderTrait for OpenAiProvider {
    type Error = LlmError;

    fn complete(&self, request: &CompletionRequest) -> Result<String, Self::Error> {
        // Blocking wrapper for async function
        self.runtime.block_on(self.complete_async(request))
    }
}
