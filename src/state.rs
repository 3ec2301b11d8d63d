//! Shared application state injected into all handlers.

use sqlx::PgPool;
use std::sync::Arc;
use std::time::Instant;

use crate::application::services::{QrService, RedirectService, ShortenService};
use crate::infrastructure::persistence::PgUrlRepository;

/// Handler-visible application state.
///
/// Services receive their repository at construction; nothing here is
/// resolved lazily or cached globally. The raw pool is kept only for the
/// health check's connectivity probe.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService<PgUrlRepository>>,
    pub redirect_service: Arc<RedirectService<PgUrlRepository>>,
    pub qr_service: Arc<QrService<PgUrlRepository>>,
    pub db: PgPool,
    pub started_at: Instant,
}

impl AppState {
    /// Wires repositories and services around a connection pool.
    pub fn new(pool: Arc<PgPool>, base_url: &str) -> Self {
        let repository = Arc::new(PgUrlRepository::new(pool.clone()));

        Self {
            shorten_service: Arc::new(ShortenService::new(repository.clone(), base_url)),
            redirect_service: Arc::new(RedirectService::new(repository.clone())),
            qr_service: Arc::new(QrService::new(repository, base_url)),
            db: pool.as_ref().clone(),
            started_at: Instant::now(),
        }
    }
}
