use std::sync::Arc;

use crate::config::ServerConfig;
use crate::store::MovieStore;
use crate::ws::WsManager;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: reelboard_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// WebSocket connection manager (live browser clients).
    pub ws_manager: Arc<WsManager>,
    /// Movie store: validation, persistence, and change notification.
    pub store: Arc<MovieStore>,
}
