//! Persona Reddit Client
//!
//! Read-only Reddit API client used to fetch a user's public comments and
//! submissions. Authenticates with the application-only OAuth flow
//! (client id, client secret and a descriptive user agent).
//!
//! # Example
//!
//! ```no_run
//! use persona_reddit::{RedditClient, RedditCredentials};
//! use persona_domain::traits::ContentSource;
//!
//! let credentials = RedditCredentials::new("client-id", "client-secret", "persona/0.1 by u/me");
//! let mut client = RedditClient::new(credentials).expect("Failed to build client");
//! client.connect().expect("Failed to authenticate");
//!
//! let mut comments = Vec::new();
//! client
//!     .comments("kojied", 100, &mut |item| comments.push(item))
//!     .expect("Failed to fetch comments");
//! ```

#![warn(missing_docs)]

mod client;
mod error;
mod listing;
mod session;

pub use client::{RedditClient, DEFAULT_API_ENDPOINT};
pub use error::RedditError;
pub use session::{AccessToken, RedditCredentials, DEFAULT_AUTH_ENDPOINT};
