//! Persona generation through a single completion call

use crate::config::GeneratorConfig;
use crate::prompt::{PromptBuilder, SYSTEM_PROMPT};
use persona_domain::traits::LlmProvider;
use persona_domain::{CompletionRequest, ContentItem, PersonaResult};
use std::fmt::Display;
use tracing::{debug, info, warn};

/// Packages fetched content into a persona prompt and calls the LLM
pub struct PersonaRequester<L>
where
    L: LlmProvider,
{
    llm_provider: L,
    config: GeneratorConfig,
}

impl<L> PersonaRequester<L>
where
    L: LlmProvider,
    L::Error: Display,
{
    /// Create a new requester
    pub fn new(llm_provider: L, config: GeneratorConfig) -> Self {
        Self {
            llm_provider,
            config,
        }
    }

    /// Access the underlying provider
    pub fn provider(&self) -> &L {
        &self.llm_provider
    }

    /// Build the completion request for `content`, which must be newest first
    pub fn build_request(&self, content: &[ContentItem], username: &str) -> CompletionRequest {
        let user = PromptBuilder::new(username, content)
            .take(self.config.context_items)
            .build();

        CompletionRequest {
            system: SYSTEM_PROMPT.to_string(),
            user,
            model: self.config.model.clone(),
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        }
    }

    /// Generate a persona for `username` from `content`
    ///
    /// Empty content yields [`PersonaResult::NoContent`] without calling the
    /// provider. Provider errors become [`PersonaResult::Failed`].
    pub fn generate_persona(&self, content: &[ContentItem], username: &str) -> PersonaResult {
        if content.is_empty() {
            return PersonaResult::NoContent;
        }

        let request = self.build_request(content, username);
        debug!(
            "Persona prompt for u/{}: {} chars from {} items",
            username,
            request.user.len(),
            content.len().min(self.config.context_items)
        );

        match self.llm_provider.complete(&request) {
            Ok(text) => {
                let body = text.trim();
                if body.is_empty() {
                    warn!("Completion for u/{} was empty", username);
                    return PersonaResult::Failed("model returned an empty response".to_string());
                }
                info!("Generated persona for u/{} ({} chars)", username, body.len());
                PersonaResult::Generated(body.to_string())
            }
            Err(e) => {
                warn!("Persona generation failed for u/{}: {}", username, e);
                PersonaResult::Failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use persona_llm::MockProvider;

    fn items(count: i64) -> Vec<ContentItem> {
        // Newest first, as the fetcher returns them
        (0..count)
            .rev()
            .map(|i| {
                ContentItem::comment(
                    &format!("comment number {:02}", i),
                    &format!("/r/test/comments/{}/", i),
                    Utc.timestamp_opt(1_700_000_000 + i, 0).unwrap(),
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_content_makes_no_call() {
        let provider = MockProvider::new("should not be used");
        let requester = PersonaRequester::new(provider.clone(), GeneratorConfig::default());

        let result = requester.generate_persona(&[], "kojied");

        assert_eq!(result, PersonaResult::NoContent);
        assert_eq!(result.text(), "No content available for this user");
        assert_eq!(provider.call_count(), 0);
    }

    #[test]
    fn test_prompt_holds_ten_newest_in_order() {
        let provider = MockProvider::new("persona");
        let requester = PersonaRequester::new(provider.clone(), GeneratorConfig::default());
        let content = items(15);

        requester.generate_persona(&content, "kojied");

        let requests = provider.requests();
        assert_eq!(requests.len(), 1);
        let prompt = &requests[0].user;

        // Newest ten are 14 down to 5
        let positions: Vec<usize> = (5..15)
            .rev()
            .map(|i| {
                prompt
                    .find(&format!("comment number {:02}", i))
                    .unwrap_or_else(|| panic!("item {} missing from prompt", i))
            })
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        for i in 0..5 {
            assert!(!prompt.contains(&format!("comment number {:02}", i)));
        }
        assert_eq!(prompt.matches("[Source: ").count(), 10);
    }

    #[test]
    fn test_request_parameters() {
        let provider = MockProvider::new("persona");
        let requester = PersonaRequester::new(provider.clone(), GeneratorConfig::default());

        requester.generate_persona(&items(1), "kojied");

        let request = &provider.requests()[0];
        assert_eq!(request.system, SYSTEM_PROMPT);
        assert_eq!(request.model, "gpt-3.5-turbo");
        assert_eq!(request.temperature, 0.7);
        assert_eq!(request.max_tokens, 1500);
        assert!(request.user.contains("for user kojied"));
    }

    #[test]
    fn test_response_is_trimmed() {
        let provider = MockProvider::new("\n\n  kojied\n**28 | ENGINEER**\n  ");
        let requester = PersonaRequester::new(provider, GeneratorConfig::default());

        let result = requester.generate_persona(&items(3), "kojied");
        assert_eq!(result, PersonaResult::Generated("kojied\n**28 | ENGINEER**".to_string()));
    }

    #[test]
    fn test_persona_mentioning_error_is_generated() {
        let provider = MockProvider::new("FRUSTRATIONS\n- Error handling boilerplate (Source: https://reddit.com/x)");
        let requester = PersonaRequester::new(provider, GeneratorConfig::default());

        let result = requester.generate_persona(&items(2), "kojied");
        assert!(result.is_generated());
    }

    #[test]
    fn test_provider_failure_is_tagged() {
        let provider = MockProvider::failing("connection reset");
        let requester = PersonaRequester::new(provider, GeneratorConfig::default());

        let result = requester.generate_persona(&items(2), "kojied");
        match &result {
            PersonaResult::Failed(detail) => assert!(detail.contains("connection reset")),
            other => panic!("Expected Failed, got {:?}", other),
        }
        assert!(result.text().starts_with("Error generating persona:"));
    }

    #[test]
    fn test_blank_response_is_failure() {
        let provider = MockProvider::new("   \n ");
        let requester = PersonaRequester::new(provider, GeneratorConfig::default());

        assert!(matches!(
            requester.generate_persona(&items(1), "kojied"),
            PersonaResult::Failed(_)
        ));
    }
}
