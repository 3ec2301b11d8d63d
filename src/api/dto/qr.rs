//! DTOs for the QR endpoint.

use serde::{Deserialize, Serialize};

/// Query parameters for QR rendering.
#[derive(Debug, Deserialize)]
pub struct QrQuery {
    /// Output format: `png` (default) or `base64`.
    pub format: Option<String>,
    /// Rendered size in pixels (100-1000, default 200).
    pub size: Option<u32>,
}

/// Envelope for a base64 QR response.
#[derive(Debug, Serialize)]
pub struct QrResponse {
    pub success: bool,
    pub message: String,
    pub data: QrData,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QrData {
    pub short_code: String,
    pub format: &'static str,
    pub qr_code: String,
    pub size: u32,
}
