//! End-to-end persona pipeline

use crate::error::GeneratorError;
use crate::fetcher::ContentFetcher;
use crate::requester::PersonaRequester;
use crate::writer::PersonaWriter;
use persona_domain::traits::{ContentSource, LlmProvider};
use persona_domain::{PersonaResult, NO_CONTENT_MESSAGE};
use std::fmt::Display;
use std::path::PathBuf;
use tracing::info;

/// Terminal state of one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// The user has no public comments or submissions
    NoContent {
        /// Reddit username
        username: String,
    },

    /// The completion call failed; nothing was written
    Failed {
        /// Reddit username
        username: String,
        /// Items fetched before generation
        item_count: usize,
        /// Provider error detail
        detail: String,
    },

    /// A persona was generated but not saved
    Generated {
        /// Reddit username
        username: String,
        /// Items fetched before generation
        item_count: usize,
        /// Persona text
        persona: String,
    },

    /// A persona was generated and written to `path`
    Saved {
        /// Reddit username
        username: String,
        /// Items fetched before generation
        item_count: usize,
        /// Persona text
        persona: String,
        /// Written persona file
        path: PathBuf,
    },
}

impl PipelineOutcome {
    /// Whether a persona was produced
    pub fn is_success(&self) -> bool {
        matches!(self, PipelineOutcome::Generated { .. } | PipelineOutcome::Saved { .. })
    }

    /// Persona text, if one was produced
    pub fn persona(&self) -> Option<&str> {
        match self {
            PipelineOutcome::Generated { persona, .. } | PipelineOutcome::Saved { persona, .. } => {
                Some(persona)
            }
            _ => None,
        }
    }

    /// One-line description of the outcome
    pub fn summary(&self) -> String {
        match self {
            PipelineOutcome::NoContent { username } => {
                format!("{} (u/{})", NO_CONTENT_MESSAGE, username)
            }
            PipelineOutcome::Failed { username, detail, .. } => {
                format!("{} (u/{})", PersonaResult::Failed(detail.clone()), username)
            }
            PipelineOutcome::Generated { username, item_count, .. } => {
                format!("Generated persona for u/{} from {} items", username, item_count)
            }
            PipelineOutcome::Saved { username, item_count, path, .. } => format!(
                "Generated persona for u/{} from {} items, saved to {}",
                username,
                item_count,
                path.display()
            ),
        }
    }
}

/// Fetch → generate → write for one username
pub struct Pipeline<S, L>
where
    S: ContentSource,
    L: LlmProvider,
{
    fetcher: ContentFetcher<S>,
    requester: PersonaRequester<L>,
    writer: PersonaWriter,
}

impl<S, L> Pipeline<S, L>
where
    S: ContentSource,
    S::Error: Display,
    L: LlmProvider,
    L::Error: Display,
{
    /// Assemble a pipeline from its stages
    pub fn new(fetcher: ContentFetcher<S>, requester: PersonaRequester<L>, writer: PersonaWriter) -> Self {
        Self {
            fetcher,
            requester,
            writer,
        }
    }

    /// The fetch stage
    pub fn fetcher(&self) -> &ContentFetcher<S> {
        &self.fetcher
    }

    /// The generation stage
    pub fn requester(&self) -> &PersonaRequester<L> {
        &self.requester
    }

    /// Run all stages and save the persona
    pub fn run(&self, username: &str) -> Result<PipelineOutcome, GeneratorError> {
        self.run_with(username, true)
    }

    /// Run all stages, saving the persona only when `save` is set
    ///
    /// At most one file is written per call, and only for a generated persona.
    pub fn run_with(&self, username: &str, save: bool) -> Result<PipelineOutcome, GeneratorError> {
        info!("Analyzing profile for u/{}", username);

        let content = self.fetcher.fetch_content(username);
        let item_count = content.len();

        let persona = match self.requester.generate_persona(&content, username) {
            PersonaResult::Generated(persona) => persona,
            PersonaResult::NoContent => {
                return Ok(PipelineOutcome::NoContent {
                    username: username.to_string(),
                })
            }
            PersonaResult::Failed(detail) => {
                return Ok(PipelineOutcome::Failed {
                    username: username.to_string(),
                    item_count,
                    detail,
                })
            }
        };

        if !save {
            return Ok(PipelineOutcome::Generated {
                username: username.to_string(),
                item_count,
                persona,
            });
        }

        let path = self.writer.save_persona_file(&persona, username)?;
        Ok(PipelineOutcome::Saved {
            username: username.to_string(),
            item_count,
            persona,
            path,
        })
    }
}
