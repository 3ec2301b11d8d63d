//! Application services orchestrating repositories and generators.

mod qr_service;
mod redirect_service;
mod shorten_service;

pub use qr_service::{DEFAULT_QR_SIZE, MAX_QR_SIZE, MIN_QR_SIZE, QrService};
pub use redirect_service::{OverallStats, RECENT_URLS_LIMIT, RedirectService};
pub use shorten_service::{ShortenOutcome, ShortenService};
