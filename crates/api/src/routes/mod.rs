pub mod health;
pub mod movie;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;
use crate::ws;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /ws                     WebSocket upgrade for live catalog updates
///
/// /movies                 list (GET), create (POST)
/// /movies/{id}            get (GET), replace (PUT), delete (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/ws", get(ws::ws_handler))
        .nest("/movies", movie::router())
}
