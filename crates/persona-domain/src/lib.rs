//! Persona Domain Layer
//!
//! Core types and trait interfaces shared by every other crate in the
//! persona generator workspace.
//!
//! ## Key Concepts
//!
//! - **ContentItem**: one comment or submission fetched from a user's profile
//! - **PersonaResult**: tagged outcome of a persona generation request
//! - **CompletionRequest**: the prompt and sampling parameters sent to an LLM
//! - **Username extraction**: turning a profile URL into a Reddit username
//!
//! ## Architecture
//!
//! This crate holds no I/O. Network clients live in `persona-reddit` and
//! `persona-llm` and plug in through the traits in [`traits`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod content;
pub mod persona;
pub mod traits;
pub mod username;

// Re-exports for convenience
pub use content::{sort_most_recent_first, ContentItem, ContentKind};
pub use persona::{CompletionRequest, PersonaResult, GENERATION_ERROR_PREFIX, NO_CONTENT_MESSAGE};
pub use username::extract_username;
