//! Wire types for Reddit listing responses.

use crate::error::RedditError;
use chrono::{DateTime, Utc};
use persona_domain::ContentItem;
use serde::Deserialize;

/// Largest page Reddit serves for a listing
pub const MAX_PAGE_SIZE: usize = 100;

/// `{"kind": "Listing", "data": {...}}`
#[derive(Debug, Deserialize)]
pub struct Listing<T> {
    pub data: ListingData<T>,
}

#[derive(Debug, Deserialize)]
pub struct ListingData<T> {
    pub children: Vec<Thing<T>>,
    /// Cursor for the next page
    #[serde(default)]
    pub after: Option<String>,
}

/// `{"kind": "t1", "data": {...}}`
#[derive(Debug, Deserialize)]
pub struct Thing<T> {
    pub data: T,
}

/// Fields of a `t1` (comment) thing
#[derive(Debug, Deserialize)]
pub struct CommentData {
    #[serde(default)]
    pub body: String,
    pub permalink: String,
    pub created_utc: f64,
}

/// Fields of a `t3` (link/self post) thing
#[derive(Debug, Deserialize)]
pub struct SubmissionData {
    pub title: String,
    #[serde(default)]
    pub selftext: String,
    pub permalink: String,
    pub created_utc: f64,
}

impl TryFrom<CommentData> for ContentItem {
    type Error = RedditError;

    fn try_from(data: CommentData) -> Result<Self, Self::Error> {
        let created_at = timestamp(data.created_utc)?;
        Ok(ContentItem::comment(&data.body, &data.permalink, created_at))
    }
}

impl TryFrom<SubmissionData> for ContentItem {
    type Error = RedditError;

    fn try_from(data: SubmissionData) -> Result<Self, Self::Error> {
        let created_at = timestamp(data.created_utc)?;
        Ok(ContentItem::submission(
            &data.title,
            &data.selftext,
            &data.permalink,
            created_at,
        ))
    }
}

fn timestamp(created_utc: f64) -> Result<DateTime<Utc>, RedditError> {
    let secs = created_utc.trunc() as i64;
    let nanos = (created_utc.fract().abs() * 1e9) as u32;
    DateTime::from_timestamp(secs, nanos)
        .ok_or_else(|| RedditError::InvalidResponse(format!("Invalid created_utc: {}", created_utc)))
}
