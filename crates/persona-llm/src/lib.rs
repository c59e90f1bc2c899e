//! Persona LLM Provider Layer
//!
//! Implementations of the `LlmProvider` trait from `persona-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `OpenAiProvider`: OpenAI-compatible chat completions API
//!
//! # Examples
//!
//! ```
//! use persona_llm::MockProvider;
//! use persona_domain::traits::LlmProvider;
//! use persona_domain::CompletionRequest;
//!
//! let provider = MockProvider::new("Hello from LLM!");
//! let request = CompletionRequest {
//!     system: "system".to_string(),
//!     user: "user".to_string(),
//!     model: "gpt-3.5-turbo".to_string(),
//!     temperature: 0.7,
//!     max_tokens: 1500,
//! };
//! let result = provider.complete(&request).unwrap();
//! assert_eq!(result, "Hello from LLM!");
//! ```

#![warn(missing_docs)]

pub mod openai;

use persona_domain::traits::LlmProvider as LlmProviderTrait;
use persona_domain::CompletionRequest;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use openai::OpenAiProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rejected credentials
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// No API key was configured
    #[error("Missing API key (set OPENAI_API_KEY)")]
    MissingApiKey,

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Mock LLM provider for deterministic testing
///
/// Returns a fixed response without making any network calls and records
/// every request it receives.
///
/// # Examples
///
/// ```
/// use persona_llm::MockProvider;
/// use persona_domain::traits::LlmProvider;
/// use persona_domain::CompletionRequest;
///
/// let provider = MockProvider::new("persona");
/// let request = CompletionRequest {
///     system: String::new(),
///     user: "describe u/kojied".to_string(),
///     model: "gpt-3.5-turbo".to_string(),
///     temperature: 0.7,
///     max_tokens: 1500,
/// };
/// provider.complete(&request).unwrap();
/// assert_eq!(provider.call_count(), 1);
/// assert_eq!(provider.requests()[0].user, "describe u/kojied");
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    response: String,
    fail_with: Option<String>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all requests
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            fail_with: None,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a MockProvider that fails every request with the given message
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            ..Self::default()
        }
    }

    /// Get the number of times complete was called
    pub fn call_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }

    /// Requests received so far, oldest first
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Forget recorded requests
    pub fn reset(&self) {
        if let Ok(mut requests) = self.requests.lock() {
            requests.clear();
        }
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn complete(&self, request: &CompletionRequest) -> Result<String, Self::Error> {
        self.requests
            .lock()
            .map_err(|_| LlmError::Other("Mock request log poisoned".to_string()))?
            .push(request.clone());

        match &self.fail_with {
            Some(message) => Err(LlmError::Other(message.clone())),
            None => Ok(self.response.clone()),
        }
    }
}
