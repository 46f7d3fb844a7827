//! Application state for Axum web framework.
//!
//! Contains shared services and resources that are accessible
//! across all request handlers.

use crate::config::CorsConfig;
use crate::db::AsyncDbPool;
use crate::repositories::Repositories;
use crate::services::Services;
use crate::session::SessionStore;

/// Application state containing all shared services and resources.
///
/// This struct is designed to be used with Axum's State extractor.
/// Cloning is cheap since Services, SessionStore, and AsyncDbPool all use
/// Arc internally.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// In-memory session store
    pub sessions: SessionStore,
    /// Direct access to the database connection pool
    pub db_pool: AsyncDbPool,
    /// Cross-origin configuration for the trusted frontend
    pub cors: CorsConfig,
}

impl AppState {
    /// Creates a new AppState from a connection pool, session store, and
    /// CORS configuration.
    pub fn new(pool: AsyncDbPool, sessions: SessionStore, cors: CorsConfig) -> Self {
        let repos = Repositories::new(pool.clone());
        let services = Services::new(repos);
        Self {
            services,
            sessions,
            db_pool: pool,
            cors,
        }
    }
}
