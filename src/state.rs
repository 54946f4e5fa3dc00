//! Shared application state injected into handlers.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::SqliteLinkRepository;
use crate::utils::code_generator::RandomCodeGenerator;

/// State shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<SqliteLinkRepository, RandomCodeGenerator>>,
    /// Kept for the health check's connectivity probe.
    pub pool: Arc<SqlitePool>,
    /// Base for generated short URLs; `None` falls back to the Host header.
    pub public_url: Option<String>,
}

impl AppState {
    pub fn new(pool: Arc<SqlitePool>, public_url: Option<String>) -> Self {
        let repository = Arc::new(SqliteLinkRepository::new(pool.clone()));
        let generator = Arc::new(RandomCodeGenerator::new());
        let link_service = Arc::new(LinkService::new(repository, generator));

        Self {
            link_service,
            pool,
            public_url,
        }
    }
}
