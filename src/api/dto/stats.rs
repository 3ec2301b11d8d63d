//! DTOs for per-code and overall statistics.

use crate::domain::entities::UrlMapping;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Wire representation of a mapping with its click metadata.
///
/// Shared by stats responses and the delete response body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlSummary {
    pub original_url: String,
    pub short_code: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UrlMapping> for UrlSummary {
    fn from(mapping: UrlMapping) -> Self {
        Self {
            original_url: mapping.original_url,
            short_code: mapping.short_code,
            click_count: mapping.click_count,
            created_at: mapping.created_at,
            updated_at: mapping.updated_at,
        }
    }
}

/// Envelope for per-code statistics.
#[derive(Debug, Serialize)]
pub struct UrlStatsResponse {
    pub success: bool,
    pub message: String,
    pub data: UrlSummary,
}

/// Envelope for overall statistics.
#[derive(Debug, Serialize)]
pub struct OverallStatsResponse {
    pub success: bool,
    pub message: String,
    pub data: OverallStatsData,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallStatsData {
    pub total_urls: i64,
    pub recent_urls: Vec<UrlSummary>,
}
