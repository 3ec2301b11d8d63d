//! URL shortening service: get-or-create with unique-code retry.

use std::sync::Arc;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, generate_code};
use serde_json::json;

/// Collision retries at one length before escalating.
const MAX_ATTEMPTS_PER_LENGTH: usize = 10;

/// Hard cap on escalated code length before generation gives up.
const MAX_GENERATED_LENGTH: usize = 12;

/// Result of a shorten request.
#[derive(Debug, Clone)]
pub struct ShortenOutcome {
    pub short_url: String,
    pub original_url: String,
    pub short_code: String,
    pub qr_code_url: String,
    pub is_new: bool,
}

/// Service for creating short links.
///
/// Shortening is get-or-create: a URL that was already shortened returns its
/// existing mapping unchanged. New URLs receive a randomly generated code,
/// retried on collision with length escalation as a bounded fallback.
pub struct ShortenService<R: UrlRepository> {
    repository: Arc<R>,
    base_url: String,
}

impl<R: UrlRepository> ShortenService<R> {
    /// Creates a new shortening service.
    ///
    /// `base_url` is the public origin short links are composed from; a
    /// trailing slash is tolerated.
    pub fn new(repository: Arc<R>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            repository,
            base_url,
        }
    }

    /// Shortens a URL, returning the existing mapping when one is present.
    ///
    /// The existence pre-check is advisory only. Two concurrent requests for
    /// the same novel URL can both pass it; the storage-layer uniqueness
    /// constraint decides the winner and the loser is handed the winner's
    /// mapping with `is_new = false`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::CodeSpaceExhausted`] when unique-code generation
    /// gives up, [`AppError::Internal`] on database errors.
    pub async fn shorten(&self, original_url: String) -> Result<ShortenOutcome, AppError> {
        if let Some(existing) = self.repository.find_by_original_url(&original_url).await? {
            return Ok(self.outcome(existing, false));
        }

        let short_code = self.generate_unique_code().await?;

        let new_mapping = NewUrlMapping {
            original_url: original_url.clone(),
            short_code,
        };

        match self.repository.create(new_mapping).await {
            Ok(mapping) => Ok(self.outcome(mapping, true)),
            Err(AppError::Conflict { .. }) => {
                // Lost the creation race; the winner's row is authoritative.
                match self.repository.find_by_original_url(&original_url).await? {
                    Some(existing) => Ok(self.outcome(existing, false)),
                    None => Err(AppError::conflict(
                        "Short code already exists",
                        json!({ "originalUrl": original_url }),
                    )),
                }
            }
            Err(e) => Err(e),
        }
    }

    /// Constructs the public short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }

    /// Constructs the QR endpoint URL for a code.
    pub fn qr_code_url(&self, code: &str) -> String {
        format!("{}/api/qr/{}", self.base_url, code)
    }

    fn outcome(&self, mapping: UrlMapping, is_new: bool) -> ShortenOutcome {
        ShortenOutcome {
            short_url: self.short_url(&mapping.short_code),
            qr_code_url: self.qr_code_url(&mapping.short_code),
            original_url: mapping.original_url,
            short_code: mapping.short_code,
            is_new,
        }
    }

    /// Generates a short code not currently present in the repository.
    ///
    /// Tries [`MAX_ATTEMPTS_PER_LENGTH`] draws at the default length, then
    /// escalates length by one and resets the counter, up to
    /// [`MAX_GENERATED_LENGTH`].
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        let mut length = DEFAULT_CODE_LENGTH;
        let mut attempts = 0;

        loop {
            let code = generate_code(length)?;

            if !self.repository.exists_by_short_code(&code).await? {
                return Ok(code);
            }

            attempts += 1;
            if attempts >= MAX_ATTEMPTS_PER_LENGTH {
                attempts = 0;
                length += 1;
                if length > MAX_GENERATED_LENGTH {
                    return Err(AppError::code_space_exhausted(
                        "Unable to generate a unique short code",
                        json!({ "maxLength": MAX_GENERATED_LENGTH }),
                    ));
                }
                tracing::warn!(length, "short code collisions, escalating code length");
            }
        }
    }
}
