//! LLM prompt construction for persona generation

use persona_domain::ContentItem;

/// System instruction sent with every persona request
pub const SYSTEM_PROMPT: &str = "You're an expert analyst creating detailed user personas from online content. Use the exact format from the example persona.";

/// Builds the user prompt for one persona request
pub struct PromptBuilder<'a> {
    username: &'a str,
    items: &'a [ContentItem],
}

impl<'a> PromptBuilder<'a> {
    /// Create a builder over the items to cite, newest first
    pub fn new(username: &'a str, items: &'a [ContentItem]) -> Self {
        Self { username, items }
    }

    /// Keep only the first `limit` items
    pub fn take(mut self, limit: usize) -> Self {
        self.items = &self.items[..limit.min(self.items.len())];
        self
    }

    /// Each item's text followed by its source on the next line, separated by blank lines
    pub fn context(&self) -> String {
        self.items
            .iter()
            .map(|item| format!("{}\n[Source: {}]", item.text(), item.source_url()))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Build the complete user prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str(&format!(
            "Create a detailed user persona based on this Reddit activity for user {}.\n",
            self.username
        ));
        prompt.push_str("Follow EXACTLY this format:\n\n");
        prompt.push_str(PERSONA_TEMPLATE);
        prompt.push_str("\n\nContent:\n");
        prompt.push_str(&self.context());
        prompt.push('\n');

        prompt
    }
}

const PERSONA_TEMPLATE: &str = r#"[Username]
**AGE | OCCUPATION | STATUS | LOCATION | ARCHETYPE**

[Personality Traits]

MOTIVATIONS
- [Motivation 1] (Source: URL)
- [Motivation 2] (Source: URL)

BEHAVIOR & HABITS
- [Behavior 1] (Source: URL)
- [Behavior 2] (Source: URL)

GOALS & NEEDS
- [Goal 1] (Source: URL)
- [Goal 2] (Source: URL)

FRUSTRATIONS
- [Frustration 1] (Source: URL)
- [Frustration 2] (Source: URL)

"A representative quote""#;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn item(text: &str, permalink: &str, secs: i64) -> ContentItem {
        ContentItem::comment(text, permalink, Utc.timestamp_opt(secs, 0).unwrap())
    }

    #[test]
    fn test_context_puts_source_on_following_line() {
        let items = vec![item("I love Rust", "/r/rust/1/", 2), item("Coffee first", "/r/coffee/2/", 1)];
        let context = PromptBuilder::new("kojied", &items).context();

        assert_eq!(
            context,
            "I love Rust\n[Source: https://reddit.com/r/rust/1/]\n\nCoffee first\n[Source: https://reddit.com/r/coffee/2/]"
        );
    }

    #[test]
    fn test_prompt_contains_template_sections() {
        let items = vec![item("hello", "/p", 1)];
        let prompt = PromptBuilder::new("kojied", &items).build();

        assert!(prompt.contains("for user kojied"));
        assert!(prompt.contains("**AGE | OCCUPATION | STATUS | LOCATION | ARCHETYPE**"));
        for section in ["MOTIVATIONS", "BEHAVIOR & HABITS", "GOALS & NEEDS", "FRUSTRATIONS"] {
            assert!(prompt.contains(section), "missing section {}", section);
        }
        assert!(prompt.contains("(Source: URL)"));
        assert!(prompt.contains("\"A representative quote\""));
        assert!(prompt.ends_with("hello\n[Source: https://reddit.com/p]\n"));
    }

    #[test]
    fn test_take_limits_items() {
        let items: Vec<_> = (0..5).map(|i| item(&format!("item {}", i), "/p", i)).collect();
        let context = PromptBuilder::new("u", &items).take(2).context();

        assert!(context.contains("item 0"));
        assert!(context.contains("item 1"));
        assert!(!context.contains("item 2"));
    }

    #[test]
    fn test_take_more_than_available() {
        let items = vec![item("only", "/p", 1)];
        let context = PromptBuilder::new("u", &items).take(10).context();
        assert_eq!(context, "only\n[Source: https://reddit.com/p]");
    }
}
