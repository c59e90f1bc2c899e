//! Application-only OAuth session with Reddit.

use crate::error::RedditError;
use serde::Deserialize;
use std::fmt;

/// Default host for token requests
pub const DEFAULT_AUTH_ENDPOINT: &str = "https://www.reddit.com";

/// Credentials of a registered Reddit "script" or "web" application
#[derive(Clone, PartialEq, Eq)]
pub struct RedditCredentials {
    /// OAuth client id
    pub client_id: String,
    /// OAuth client secret
    pub client_secret: String,
    /// Descriptive user agent, e.g. "persona/0.1 by u/someone"
    pub user_agent: String,
}

impl RedditCredentials {
    /// Bundle the three credential values
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            user_agent: user_agent.into(),
        }
    }
}

// Keep the secret out of logs and panic messages
impl fmt::Debug for RedditCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedditCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Bearer token returned by the token endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct AccessToken {
    /// Token value sent as `Authorization: bearer <token>`
    pub access_token: String,
    /// Token type (always "bearer")
    pub token_type: String,
    /// Lifetime in seconds
    #[serde(default)]
    pub expires_in: u64,
}

/// Token endpoint error body, e.g. `{"error": "invalid_grant"}`
#[derive(Debug, Deserialize)]
struct TokenError {
    error: serde_json::Value,
}

/// Establish an application-only session with Reddit
pub async fn establish_session(
    http_client: &reqwest::Client,
    auth_endpoint: &str,
    credentials: &RedditCredentials,
) -> Result<AccessToken, RedditError> {
    let url = format!("{}/api/v1/access_token", auth_endpoint);

    let response = http_client
        .post(&url)
        .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
        .header(reqwest::header::USER_AGENT, &credentials.user_agent)
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
        return Err(RedditError::AuthError(format!("HTTP {}: {}", status, error_text)));
    }

    // Reddit answers bad credentials with 200 and an error body
    let body = response.text().await?;
    if let Ok(token) = serde_json::from_str::<AccessToken>(&body) {
        return Ok(token);
    }
    match serde_json::from_str::<TokenError>(&body) {
        Ok(err) => Err(RedditError::AuthError(format!("Token request rejected: {}", err.error))),
        Err(e) => Err(e.into()),
    }
}
