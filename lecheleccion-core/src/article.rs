//! Article records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Upper bound on the number of articles returned by a listing.
pub const ARTICLE_LIST_LIMIT: i64 = 50;

/// A news article as stored in `collections.articles`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: i64,
    pub url: String,
    pub url_to_image: Option<String>,
    /// Publisher name, e.g. "Reuters"
    pub source: String,
    pub publication_date: DateTime<Utc>,
    pub title: String,
    pub body: String,
    /// Identifier assigned by the upstream news feed
    pub external_reference_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
