//! Content retrieval with fixed pacing

use crate::config::GeneratorConfig;
use persona_domain::traits::ContentSource;
use persona_domain::{sort_most_recent_first, ContentItem};
use std::fmt::Display;
use std::thread;
use tracing::{debug, info, warn};

/// Collects a user's newest comments and submissions
pub struct ContentFetcher<S>
where
    S: ContentSource,
{
    source: S,
    config: GeneratorConfig,
}

impl<S> ContentFetcher<S>
where
    S: ContentSource,
    S::Error: Display,
{
    /// Create a new fetcher over a content source
    pub fn new(source: S, config: GeneratorConfig) -> Self {
        Self { source, config }
    }

    /// Access the underlying source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch comments then submissions, newest first
    ///
    /// Sleeps for the configured pause after every item as it arrives, so
    /// later page requests are paced too. A source failure is logged and ends
    /// the fetch early; every item received before it is still returned. An
    /// empty result means the user has no public content.
    pub fn fetch_content(&self, username: &str) -> Vec<ContentItem> {
        let mut content = Vec::new();

        if let Err(e) = self.collect(username, &mut content) {
            warn!(
                "Error fetching content for u/{}: {} (keeping {} items)",
                username,
                e,
                content.len()
            );
        }

        sort_most_recent_first(&mut content);
        info!("Fetched {} items for u/{}", content.len(), username);
        content
    }

    fn collect(&self, username: &str, content: &mut Vec<ContentItem>) -> Result<(), S::Error> {
        let before = content.len();
        self.source.comments(username, self.config.comment_limit, &mut |item: ContentItem| {
            self.push_paced(item, content)
        })?;
        debug!("Received {} comments for u/{}", content.len() - before, username);

        let before = content.len();
        self.source.submissions(username, self.config.submission_limit, &mut |item: ContentItem| {
            self.push_paced(item, content)
        })?;
        debug!("Received {} submissions for u/{}", content.len() - before, username);

        Ok(())
    }

    fn push_paced(&self, item: ContentItem, content: &mut Vec<ContentItem>) {
        content.push(item);
        let pause = self.config.item_pause();
        if !pause.is_zero() {
            thread::sleep(pause);
        }
    }
}
