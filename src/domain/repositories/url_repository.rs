//! Repository trait for URL mapping data access.

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for URL mappings.
///
/// The backing store enforces uniqueness of both `original_url` and
/// `short_code`; callers must treat [`AppError::Conflict`] from [`create`]
/// as an expected, recoverable outcome of concurrent requests.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// [`create`]: UrlRepository::create
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Creates a new mapping with a zero click count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the original URL or short code is
    /// already taken, [`AppError::Internal`] on database errors.
    async fn create(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError>;

    /// Finds a mapping by its original URL.
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlMapping>, AppError>;

    /// Finds a mapping by its short code.
    async fn find_by_short_code(&self, short_code: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Returns whether a mapping with the given short code exists.
    async fn exists_by_short_code(&self, short_code: &str) -> Result<bool, AppError>;

    /// Resolves a short code to its original URL, counting the click.
    ///
    /// The click-count increment and `updated_at` touch happen in a single
    /// atomic statement at the store, so concurrent redirects of the same
    /// code never lose updates.
    ///
    /// # Returns
    ///
    /// `Ok(None)` if the short code is unknown.
    async fn resolve_and_count_click(&self, short_code: &str)
    -> Result<Option<String>, AppError>;

    /// Counts all mappings.
    async fn count(&self) -> Result<i64, AppError>;

    /// Returns the most recently created mappings, newest first.
    async fn recent(&self, limit: i64) -> Result<Vec<UrlMapping>, AppError>;

    /// Deletes a mapping by short code.
    ///
    /// Returns `Ok(true)` if a mapping was removed, `Ok(false)` if the code
    /// was unknown.
    async fn delete_by_short_code(&self, short_code: &str) -> Result<bool, AppError>;
}
