use std::sync::Arc;

use crate::config::ServerConfig;
use crate::notify::Notifier;
use crate::storage::BlobStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: civica_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Best-effort email notification service.
    pub notifier: Arc<Notifier>,
    /// Local blob store for uploaded issue images.
    pub blobs: Arc<BlobStore>,
}
