//! Persona Generator
//!
//! Turns a Reddit user's recent activity into a written persona.
//!
//! # Architecture
//!
//! ```text
//! username → ContentFetcher → PersonaRequester → LLM → PersonaWriter → file
//! ```
//!
//! - **ContentFetcher**: newest comments and submissions, paced by a fixed
//!   pause, sorted newest first, partial results on failure
//! - **PersonaRequester**: builds the persona prompt from the newest items and
//!   makes a single completion call
//! - **PersonaWriter**: writes the persona to a timestamped text file
//! - **Pipeline**: runs the three stages and reports a tagged outcome
//!
//! # Example Usage
//!
//! ```no_run
//! use persona_generator::{ContentFetcher, GeneratorConfig, PersonaRequester, PersonaWriter, Pipeline};
//! use persona_llm::MockProvider;
//! # use persona_domain::{traits::ContentSource, ContentItem};
//! # struct Source;
//! # impl ContentSource for Source {
//! #     type Error = String;
//! #     fn comments(&self, _: &str, _: usize, _: &mut dyn FnMut(ContentItem)) -> Result<(), String> { Ok(()) }
//! #     fn submissions(&self, _: &str, _: usize, _: &mut dyn FnMut(ContentItem)) -> Result<(), String> { Ok(()) }
//! # }
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GeneratorConfig::default();
//! let pipeline = Pipeline::new(
//!     ContentFetcher::new(Source, config.clone()),
//!     PersonaRequester::new(MockProvider::new("kojied\n..."), config.clone()),
//!     PersonaWriter::new(&config.output_dir),
//! );
//!
//! let outcome = pipeline.run("kojied")?;
//! println!("{}", outcome.summary());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod fetcher;
mod pipeline;
mod prompt;
mod requester;
mod writer;


pub use config::GeneratorConfig;
pub use error::GeneratorError;
pub use fetcher::ContentFetcher;
pub use pipeline::{Pipeline, PipelineOutcome};
pub use prompt::{PromptBuilder, SYSTEM_PROMPT};
pub use requester::PersonaRequester;
pub use writer::{persona_filename, PersonaWriter, PERSONA_FILE_TITLE};
