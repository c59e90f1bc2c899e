//! Reddit client implementation.

use crate::error::RedditError;
use crate::listing::{CommentData, Listing, ListingData, SubmissionData, MAX_PAGE_SIZE};
use crate::session::{establish_session, AccessToken, RedditCredentials, DEFAULT_AUTH_ENDPOINT};
use persona_domain::traits::ContentSource;
use persona_domain::ContentItem;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

/// Default host for authenticated API calls
pub const DEFAULT_API_ENDPOINT: &str = "https://oauth.reddit.com";

/// Timeout for a single Reddit request
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Blocking Reddit API client
///
/// Call [`RedditClient::connect`] once before fetching; every listing call
/// reuses the session token.
pub struct RedditClient {
    auth_endpoint: String,
    api_endpoint: String,
    credentials: RedditCredentials,
    http_client: reqwest::Client,
    runtime: tokio::runtime::Runtime,
    token: Option<AccessToken>,
}

impl RedditClient {
    /// Create a new client against the public Reddit endpoints
    pub fn new(credentials: RedditCredentials) -> Result<Self, RedditError> {
        let http_client = reqwest::Client::builder()
            .user_agent(credentials.user_agent.clone())
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| RedditError::Setup(format!("Failed to build HTTP client: {}", e)))?;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| RedditError::Setup(format!("Failed to create runtime: {}", e)))?;

        Ok(Self {
            auth_endpoint: DEFAULT_AUTH_ENDPOINT.to_string(),
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            credentials,
            http_client,
            runtime,
            token: None,
        })
    }

    /// Override the token and API hosts
    pub fn with_endpoints(mut self, auth_endpoint: &str, api_endpoint: &str) -> Self {
        self.auth_endpoint = auth_endpoint.trim_end_matches('/').to_string();
        self.api_endpoint = api_endpoint.trim_end_matches('/').to_string();
        self
    }

    /// Obtain an application-only access token
    pub fn connect(&mut self) -> Result<(), RedditError> {
        let token = self.runtime.block_on(establish_session(
            &self.http_client,
            &self.auth_endpoint,
            &self.credentials,
        ))?;

        info!("Reddit session established (expires in {}s)", token.expires_in);
        self.token = Some(token);
        Ok(())
    }

    /// Whether a session token is held
    pub fn is_connected(&self) -> bool {
        self.token.is_some()
    }

    /// Listing URL with `username` percent-encoded as a single path segment
    fn listing_url(&self, username: &str, section: &str) -> Result<reqwest::Url, RedditError> {
        let mut url = reqwest::Url::parse(&self.api_endpoint)
            .map_err(|e| RedditError::Setup(format!("Invalid API endpoint {}: {}", self.api_endpoint, e)))?;
        url.path_segments_mut()
            .map_err(|_| RedditError::Setup(format!("API endpoint cannot take a path: {}", self.api_endpoint)))?
            .pop_if_empty()
            .extend(["user", username, section]);
        Ok(url)
    }

    /// Fetch one page of a user listing
    async fn fetch_page<T>(
        &self,
        token: &AccessToken,
        url: &reqwest::Url,
        username: &str,
        page_size: usize,
        after: Option<&str>,
    ) -> Result<ListingData<T>, RedditError>
    where
        T: DeserializeOwned,
    {
        let mut query = vec![
            ("sort", "new".to_string()),
            ("limit", page_size.to_string()),
            ("raw_json", "1".to_string()),
        ];
        if let Some(cursor) = after {
            query.push(("after", cursor.to_string()));
        }

        debug!("GET {} (limit {}, after {:?})", url, page_size, after);

        let response = self
            .http_client
            .get(url.clone())
            .bearer_auth(&token.access_token)
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND || status == reqwest::StatusCode::FORBIDDEN {
            return Err(RedditError::UserNotFound(username.to_string()));
        }
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(RedditError::ApiError(format!("HTTP {}: {}", status, error_text)));
        }

        let listing: Listing<T> = response.json().await?;
        Ok(listing.data)
    }

    /// Walk up to `limit` things of a user listing, newest first
    ///
    /// Each thing goes to `on_thing` as soon as its page arrives, so a failed
    /// page only loses the pages after it.
    fn fetch_listing<T, F>(
        &self,
        username: &str,
        section: &str,
        limit: usize,
        mut on_thing: F,
    ) -> Result<(), RedditError>
    where
        T: DeserializeOwned,
        F: FnMut(T) -> Result<(), RedditError>,
    {
        let token = self.token.as_ref().ok_or(RedditError::NotConnected)?;
        let url = self.listing_url(username, section)?;

        let mut received = 0;
        let mut after: Option<String> = None;

        while received < limit {
            let page_size = (limit - received).min(MAX_PAGE_SIZE);
            let page: ListingData<T> = self.runtime.block_on(self.fetch_page(
                token,
                &url,
                username,
                page_size,
                after.as_deref(),
            ))?;

            let count = page.children.len();
            for thing in page.children.into_iter().take(limit - received) {
                on_thing(thing.data)?;
                received += 1;
            }

            after = page.after;
            if after.is_none() || count == 0 {
                break;
            }
        }

        Ok(())
    }
}

impl ContentSource for RedditClient {
    type Error = RedditError;

    fn comments(
        &self,
        username: &str,
        limit: usize,
        sink: &mut dyn FnMut(ContentItem),
    ) -> Result<(), Self::Error> {
        self.fetch_listing(username, "comments", limit, |data: CommentData| {
            sink(ContentItem::try_from(data)?);
            Ok(())
        })
    }

    fn submissions(
        &self,
        username: &str,
        limit: usize,
        sink: &mut dyn FnMut(ContentItem),
    ) -> Result<(), Self::Error> {
        self.fetch_listing(username, "submitted", limit, |data: SubmissionData| {
            sink(ContentItem::try_from(data)?);
            Ok(())
        })
    }
}
