//! QR code rendering for short links.
//!
//! Matrix computation and PNG encoding are delegated to the `qrcode` and
//! `image` crates; this service only verifies that the code exists, composes
//! the target URL, and shapes the output. Encoding runs on the blocking
//! thread pool so the event loop stays responsive.

use std::io::Cursor;
use std::sync::Arc;

use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::{DynamicImage, ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};
use serde_json::json;

/// Default rendered size in pixels.
pub const DEFAULT_QR_SIZE: u32 = 200;

/// Inclusive size bounds accepted at the HTTP boundary.
pub const MIN_QR_SIZE: u32 = 100;
pub const MAX_QR_SIZE: u32 = 1000;

/// Service rendering QR images for existing short links.
pub struct QrService<R: UrlRepository> {
    repository: Arc<R>,
    base_url: String,
}

impl<R: UrlRepository> QrService<R> {
    /// Creates a new QR service.
    pub fn new(repository: Arc<R>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            repository,
            base_url,
        }
    }

    /// Returns whether a QR code can be generated for the given short code.
    pub async fn can_generate(&self, short_code: &str) -> Result<bool, AppError> {
        self.repository.exists_by_short_code(short_code).await
    }

    /// Renders the short link as a PNG image.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown codes and
    /// [`AppError::Internal`] when encoding fails.
    pub async fn render_png(&self, short_code: &str, size: u32) -> Result<Vec<u8>, AppError> {
        self.ensure_exists(short_code).await?;

        let target = self.short_url(short_code);
        tokio::task::spawn_blocking(move || encode_qr_png(&target, size))
            .await
            .map_err(|e| {
                AppError::internal(
                    "QR rendering task failed",
                    json!({ "reason": e.to_string() }),
                )
            })?
    }

    /// Renders the short link as a base64 PNG data URI.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::render_png`].
    pub async fn render_data_uri(&self, short_code: &str, size: u32) -> Result<String, AppError> {
        let png = self.render_png(short_code, size).await?;
        Ok(format!("data:image/png;base64,{}", STANDARD.encode(png)))
    }

    fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }

    async fn ensure_exists(&self, short_code: &str) -> Result<(), AppError> {
        if self.can_generate(short_code).await? {
            Ok(())
        } else {
            Err(AppError::not_found(
                "Short code not found",
                json!({ "shortCode": short_code }),
            ))
        }
    }
}

/// Encodes `target` as a QR matrix (error correction level M) and renders it
/// into a PNG at least `size` pixels wide.
fn encode_qr_png(target: &str, size: u32) -> Result<Vec<u8>, AppError> {
    let code = QrCode::with_error_correction_level(target.as_bytes(), EcLevel::M).map_err(|e| {
        AppError::internal(
            "Failed to generate QR code",
            json!({ "reason": e.to_string() }),
        )
    })?;

    let matrix = code
        .render::<Luma<u8>>()
        .min_dimensions(size, size)
        .build();

    let mut png = Vec::new();
    DynamicImage::ImageLuma8(matrix)
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| {
            AppError::internal(
                "Failed to encode QR image",
                json!({ "reason": e.to_string() }),
            )
        })?;

    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlRepository;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

    #[tokio::test]
    async fn test_can_generate_reflects_existence() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_exists_by_short_code()
            .withf(|code| code == "AbCdE2")
            .times(1)
            .returning(|_| Ok(true));

        let service = QrService::new(Arc::new(mock_repo), "http://localhost:3000");
        assert!(service.can_generate("AbCdE2").await.unwrap());
    }

    #[tokio::test]
    async fn test_render_png_unknown_code_is_not_found() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_exists_by_short_code()
            .times(1)
            .returning(|_| Ok(false));

        let service = QrService::new(Arc::new(mock_repo), "http://localhost:3000");

        let result = service.render_png("zzzz99", DEFAULT_QR_SIZE).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_render_png_produces_valid_png() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_exists_by_short_code()
            .times(1)
            .returning(|_| Ok(true));

        let service = QrService::new(Arc::new(mock_repo), "http://localhost:3000");

        let png = service.render_png("AbCdE2", 300).await.unwrap();
        assert!(png.starts_with(PNG_MAGIC));

        let img = image::load_from_memory(&png).unwrap();
        assert!(img.width() >= 300);
        assert_eq!(img.width(), img.height());
    }

    #[tokio::test]
    async fn test_render_data_uri_has_png_prefix() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_exists_by_short_code()
            .times(1)
            .returning(|_| Ok(true));

        let service = QrService::new(Arc::new(mock_repo), "http://localhost:3000");

        let uri = service
            .render_data_uri("AbCdE2", DEFAULT_QR_SIZE)
            .await
            .unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
        assert!(uri.len() > "data:image/png;base64,".len());
    }
}
