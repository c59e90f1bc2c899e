//! Configuration for the generator

use crate::error::GeneratorError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Configuration for fetching, prompting and writing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Maximum comments fetched per user
    pub comment_limit: usize,

    /// Maximum submissions fetched per user
    pub submission_limit: usize,

    /// Pause after each fetched item (milliseconds)
    pub item_pause_ms: u64,

    /// Number of newest items included in the prompt
    pub context_items: usize,

    /// Completion model identifier
    pub model: String,

    /// Sampling temperature
    pub temperature: f64,

    /// Maximum completion tokens
    pub max_tokens: u32,

    /// Directory persona files are written to
    pub output_dir: PathBuf,
}

impl GeneratorConfig {
    /// Get the per-item pause as a Duration
    pub fn item_pause(&self) -> Duration {
        Duration::from_millis(self.item_pause_ms)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), GeneratorError> {
        let invalid = |msg: &str| Err(GeneratorError::Config(msg.to_string()));

        if self.context_items == 0 {
            return invalid("context_items must be greater than 0");
        }
        if self.model.trim().is_empty() {
            return invalid("model must not be empty");
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return invalid("temperature must be between 0.0 and 2.0");
        }
        if self.max_tokens == 0 {
            return invalid("max_tokens must be greater than 0");
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, GeneratorError> {
        toml::from_str(toml_str).map_err(|e| GeneratorError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, GeneratorError> {
        toml::to_string_pretty(self)
            .map_err(|e| GeneratorError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            comment_limit: 100,
            submission_limit: 50,
            item_pause_ms: 100,
            context_items: 10,
            model: "gpt-3.5-turbo".to_string(),
            temperature: 0.7,
            max_tokens: 1500,
            output_dir: PathBuf::from("."),
        }
    }
}
