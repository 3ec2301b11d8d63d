//! Redirect resolution, click statistics, and mapping deletion.

use std::sync::Arc;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use serde_json::json;

/// Number of mappings returned by the overall-stats query.
pub const RECENT_URLS_LIMIT: i64 = 10;

/// Aggregate statistics across all mappings.
#[derive(Debug, Clone)]
pub struct OverallStats {
    pub total_urls: i64,
    pub recent_urls: Vec<UrlMapping>,
}

/// Service resolving short codes and serving click statistics.
pub struct RedirectService<R: UrlRepository> {
    repository: Arc<R>,
}

impl<R: UrlRepository> RedirectService<R> {
    /// Creates a new redirect service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Resolves a short code to its original URL, counting the click.
    ///
    /// The increment happens atomically at the store as part of resolution.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown codes.
    pub async fn resolve(&self, short_code: &str) -> Result<String, AppError> {
        self.repository
            .resolve_and_count_click(short_code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short URL not found", json!({ "shortCode": short_code }))
            })
    }

    /// Returns the mapping for a short code without touching it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown codes.
    pub async fn stats(&self, short_code: &str) -> Result<UrlMapping, AppError> {
        self.repository
            .find_by_short_code(short_code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short URL not found", json!({ "shortCode": short_code }))
            })
    }

    /// Returns the total mapping count and the most recent mappings.
    pub async fn overall_stats(&self) -> Result<OverallStats, AppError> {
        let total_urls = self.repository.count().await?;
        let recent_urls = self.repository.recent(RECENT_URLS_LIMIT).await?;

        Ok(OverallStats {
            total_urls,
            recent_urls,
        })
    }

    /// Counts all mappings.
    pub async fn total_urls(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Deletes a mapping by short code, returning the removed mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown, or if another
    /// request deleted it between the lookup and the delete.
    pub async fn delete(&self, short_code: &str) -> Result<UrlMapping, AppError> {
        let mapping = self.stats(short_code).await?;

        if self.repository.delete_by_short_code(short_code).await? {
            Ok(mapping)
        } else {
            Err(AppError::not_found(
                "Short URL not found",
                json!({ "shortCode": short_code }),
            ))
        }
    }
}
