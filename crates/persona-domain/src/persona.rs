//! Persona module - generation requests and their outcomes

use std::fmt;

/// Message shown when a user has no public content to analyze
pub const NO_CONTENT_MESSAGE: &str = "No content available for this user";

/// Prefix used when rendering a failed generation for display
pub const GENERATION_ERROR_PREFIX: &str = "Error generating persona:";

/// A single chat completion request
///
/// Lives only for the duration of one provider call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// System instruction
    pub system: String,

    /// User instruction carrying the persona template and content
    pub user: String,

    /// Model identifier (e.g., "gpt-3.5-turbo")
    pub model: String,

    /// Sampling temperature
    pub temperature: f64,

    /// Maximum number of output tokens
    pub max_tokens: u32,
}

/// Outcome of a persona generation request
///
/// Success and failure are distinct variants, so a persona whose text
/// mentions an error is never mistaken for a failed generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonaResult {
    /// The model produced a persona
    Generated(String),

    /// There was nothing to analyze; no request was made
    NoContent,

    /// The completion call failed
    Failed(String),
}

impl PersonaResult {
    /// Whether a persona body is available
    pub fn is_generated(&self) -> bool {
        matches!(self, PersonaResult::Generated(_))
    }

    /// The generated body, if any
    pub fn body(&self) -> Option<&str> {
        match self {
            PersonaResult::Generated(body) => Some(body),
            _ => None,
        }
    }

    /// Human-readable text for this outcome
    ///
    /// # Examples
    ///
    /// ```
    /// use persona_domain::PersonaResult;
    ///
    /// let failed = PersonaResult::Failed("timeout".to_string());
    /// assert_eq!(failed.text(), "Error generating persona: timeout");
    /// ```
    pub fn text(&self) -> String {
        match self {
            PersonaResult::Generated(body) => body.clone(),
            PersonaResult::NoContent => NO_CONTENT_MESSAGE.to_string(),
            PersonaResult::Failed(detail) => format!("{} {}", GENERATION_ERROR_PREFIX, detail),
        }
    }
}

impl fmt::Display for PersonaResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}
