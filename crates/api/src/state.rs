use std::sync::Arc;

use crate::config::ServerConfig;
use crate::media::MediaStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: hub_db::DbPool,
    /// Server configuration (read by the auth gate and the auth handlers).
    pub config: Arc<ServerConfig>,
    /// Media host client shared across requests.
    pub media: Arc<MediaStore>,
}
