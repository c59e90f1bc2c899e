//! Username extraction from Reddit profile URLs

use regex::Regex;
use std::sync::LazyLock;

/// Matches `http(s)://[www.]reddit.com/{user,u}/<name>[/]` anywhere in the input;
/// the name stops at the next `/`, `?` or `#`
static PROFILE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://(?:www\.)?reddit\.com/(?:user|u)/([^/?#]+)/?").expect("profile URL pattern is valid")
});

/// Extract a username from a Reddit profile URL
///
/// Accepts `reddit.com` and `www.reddit.com` hosts with either the `/user/`
/// or `/u/` prefix, with or without a trailing slash. Scheme and host are
/// matched case-sensitively. As a fallback, a URL containing `/comments/`
/// whose fifth slash-separated segment is `user` yields the sixth segment.
///
/// Returns `None` when no shape matches; callers treat that as invalid
/// input, before any network call is made.
///
/// # Examples
///
/// ```
/// use persona_domain::extract_username;
///
/// assert_eq!(extract_username("https://www.reddit.com/user/kojied/").as_deref(), Some("kojied"));
/// assert_eq!(extract_username("https://reddit.com/u/Hungry-Move-6603").as_deref(), Some("Hungry-Move-6603"));
/// assert_eq!(extract_username("https://www.reddit.com/r/test/"), None);
/// ```
pub fn extract_username(url: &str) -> Option<String> {
    if let Some(name) = PROFILE_URL.captures(url).and_then(|caps| caps.get(1)) {
        return Some(name.as_str().to_string());
    }

    if url.contains("/comments/") {
        let parts: Vec<&str> = url.split('/').collect();
        if parts.len() > 5 && parts[4] == "user" && !parts[5].is_empty() {
            return Some(parts[5].to_string());
        }
    }

    None
}
