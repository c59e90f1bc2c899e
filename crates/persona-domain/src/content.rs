//! Content module - units of fetched user activity

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Base URL prepended to Reddit permalinks
pub const REDDIT_BASE_URL: &str = "https://reddit.com";

/// Kind of fetched activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// A comment left on someone else's post
    Comment,

    /// A post (link or self text) submitted by the user
    Submission,
}

impl ContentKind {
    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Comment => "comment",
            ContentKind::Submission => "submission",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One comment or submission fetched from a user's profile
///
/// Items are immutable once constructed; fields are only reachable through
/// accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentItem {
    kind: ContentKind,
    text: String,
    source_url: String,
    created_at: DateTime<Utc>,
}

impl ContentItem {
    /// Create an item from already-resolved parts
    pub fn new(
        kind: ContentKind,
        text: impl Into<String>,
        source_url: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            kind,
            text: text.into(),
            source_url: source_url.into(),
            created_at,
        }
    }

    /// Create a comment item from its body and permalink
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use persona_domain::{ContentItem, ContentKind};
    ///
    /// let created = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
    /// let item = ContentItem::comment("nice build", "/r/rust/comments/abc/x/def/", created);
    /// assert_eq!(item.kind(), ContentKind::Comment);
    /// assert_eq!(item.source_url(), "https://reddit.com/r/rust/comments/abc/x/def/");
    /// ```
    pub fn comment(body: &str, permalink: &str, created_at: DateTime<Utc>) -> Self {
        Self::new(
            ContentKind::Comment,
            body,
            permalink_url(permalink),
            created_at,
        )
    }

    /// Create a submission item; the text is the title and body on separate lines
    pub fn submission(
        title: &str,
        selftext: &str,
        permalink: &str,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self::new(
            ContentKind::Submission,
            format!("{}\n{}", title, selftext),
            permalink_url(permalink),
            created_at,
        )
    }

    /// Whether this is a comment or a submission
    pub fn kind(&self) -> ContentKind {
        self.kind
    }

    /// Comment body, or title and body for submissions
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Absolute link back to the item
    pub fn source_url(&self) -> &str {
        &self.source_url
    }

    /// Creation time reported by Reddit
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Sort items newest first
///
/// The sort is stable, so items sharing a timestamp keep their fetch order.
pub fn sort_most_recent_first(items: &mut [ContentItem]) {
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

fn permalink_url(permalink: &str) -> String {
    format!("{}{}", REDDIT_BASE_URL, permalink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_submission_text_joins_title_and_body() {
        let item = ContentItem::submission("Title", "Body text", "/r/test/comments/1/t/", at(10));
        assert_eq!(item.kind(), ContentKind::Submission);
        assert_eq!(item.text(), "Title\nBody text");
        assert_eq!(item.source_url(), "https://reddit.com/r/test/comments/1/t/");
    }

    #[test]
    fn test_link_submission_keeps_trailing_newline() {
        let item = ContentItem::submission("Only a title", "", "/r/test/comments/2/t/", at(10));
        assert_eq!(item.text(), "Only a title\n");
    }

    #[test]
    fn test_sort_most_recent_first() {
        let mut items = vec![
            ContentItem::comment("old", "/a", at(100)),
            ContentItem::comment("newest", "/b", at(300)),
            ContentItem::submission("mid", "", "/c", at(200)),
        ];
        sort_most_recent_first(&mut items);

        let texts: Vec<_> = items.iter().map(|i| i.text()).collect();
        assert_eq!(texts, vec!["newest", "mid\n", "old"]);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ContentKind::Comment.to_string(), "comment");
        assert_eq!(ContentKind::Submission.to_string(), "submission");
    }

    proptest! {
        #[test]
        fn sorted_items_are_non_increasing(stamps in prop::collection::vec(0i64..2_000_000_000, 0..64)) {
            let mut items: Vec<_> = stamps
                .iter()
                .map(|s| ContentItem::comment("x", "/p", at(*s)))
                .collect();
            sort_most_recent_first(&mut items);

            for pair in items.windows(2) {
                prop_assert!(pair[0].created_at() >= pair[1].created_at());
            }
            prop_assert_eq!(items.len(), stamps.len());
        }
    }
}
