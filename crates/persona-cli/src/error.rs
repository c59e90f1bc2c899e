//! Error types for the CLI application.

use persona_generator::GeneratorError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Accepted profile URL shapes, shown on invalid input.
pub const URL_FORMATS_HELP: &str = "Please use one of these formats:
  - https://www.reddit.com/user/username
  - https://www.reddit.com/u/username
  - https://reddit.com/user/username";

/// Suggestions shown after a failed run.
pub const COMMON_SOLUTIONS_HELP: &str = "Common solutions:
  1. Verify your Reddit API credentials in the .env file
  2. Check the username is correct
  3. Ensure the user has public content";

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL did not match any profile shape
    #[error("Invalid Reddit URL format: {0}")]
    InvalidUrl(String),

    /// Reddit API error
    #[error("Reddit error: {0}")]
    Reddit(#[from] persona_reddit::RedditError),

    /// LLM provider setup error
    #[error("LLM error: {0}")]
    Llm(#[from] persona_llm::LlmError),

    /// Generator error
    #[error("Generator error: {0}")]
    Generator(GeneratorError),

    /// The completion call failed
    #[error("Failed to generate persona: {0}")]
    Generation(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<GeneratorError> for CliError {
    fn from(err: GeneratorError) -> Self {
        match err {
            GeneratorError::Config(msg) => CliError::Config(msg),
            other => CliError::Generator(other),
        }
    }
}

impl CliError {
    /// Follow-up guidance to print under the error message, if any.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            CliError::InvalidUrl(_) => Some(URL_FORMATS_HELP),
            CliError::Config(_) | CliError::Reddit(_) | CliError::Generation(_) => {
                Some(COMMON_SOLUTIONS_HELP)
            }
            _ => None,
        }
    }
}
