//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

use crate::{CompletionRequest, ContentItem};

/// Trait for reading a user's public activity
///
/// Items are handed to `sink` one at a time as they arrive, newest first.
/// An error ends the listing; items already passed to `sink` stay with the
/// caller.
///
/// Implemented by the infrastructure layer (persona-reddit)
pub trait ContentSource {
    /// Error type for source operations
    type Error;

    /// Newest comments by `username`, at most `limit`
    fn comments(
        &self,
        username: &str,
        limit: usize,
        sink: &mut dyn FnMut(ContentItem),
    ) -> Result<(), Self::Error>;

    /// Newest submissions by `username`, at most `limit`
    fn submissions(
        &self,
        username: &str,
        limit: usize,
        sink: &mut dyn FnMut(ContentItem),
    ) -> Result<(), Self::Error>;
}

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (persona-llm)
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Run one chat completion and return the raw completion text
    fn complete(&self, request: &CompletionRequest) -> Result<String, Self::Error>;
}
