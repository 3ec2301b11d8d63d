//! URL mapping entity: the association between a short code and its target.

use chrono::{DateTime, Utc};

/// A shortened URL with its click metadata.
///
/// `original_url` and `short_code` are both unique across all mappings and
/// immutable after creation; only `click_count` and `updated_at` change.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlMapping {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_code: String,
        click_count: i64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url,
            short_code,
            click_count,
            created_at,
            updated_at,
        }
    }
}

/// Input data for creating a new mapping.
///
/// `click_count` starts at zero and timestamps are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewUrlMapping {
    pub original_url: String,
    pub short_code: String,
}
