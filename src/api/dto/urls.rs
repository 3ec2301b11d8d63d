//! DTOs for mapping administration.

use crate::api::dto::stats::UrlSummary;
use serde::Serialize;

/// Response body for a successful delete.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub message: String,
    pub deleted_url: UrlSummary,
}
