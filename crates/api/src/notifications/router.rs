//! Event-to-WebSocket routing.
//!
//! [`NotificationRouter`] subscribes to the catalog event bus and forwards
//! each [`MovieEvent`] to every connected WebSocket client as a JSON text
//! frame. Delivery is best-effort: clients disconnected at broadcast time
//! receive nothing and are not backfilled on reconnect.

use std::sync::Arc;

use axum::extract::ws::Message;
use reelboard_events::MovieEvent;
use tokio::sync::broadcast;

use crate::ws::WsManager;

/// Forwards catalog change events to all connected clients.
pub struct NotificationRouter {
    ws_manager: Arc<WsManager>,
}

impl NotificationRouter {
    /// Create a new router targeting the given WebSocket manager.
    pub fn new(ws_manager: Arc<WsManager>) -> Self {
        Self { ws_manager }
    }

    /// Run the main routing loop.
    ///
    /// Subscribes to the event bus via `receiver` and broadcasts each
    /// event. The loop exits when the channel is closed (i.e. the
    /// [`EventBus`](reelboard_events::EventBus) is dropped).
    pub async fn run(self, mut receiver: broadcast::Receiver<MovieEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => self.forward(&event).await,
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Notification router lagged");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, notification router shutting down");
                    break;
                }
            }
        }
    }

    /// Serialize one event and hand it to the connection manager.
    async fn forward(&self, event: &MovieEvent) {
        match serde_json::to_string(event) {
            Ok(text) => {
                tracing::debug!(movie_id = event.movie_id(), "Broadcasting catalog change");
                self.ws_manager.broadcast(Message::Text(text.into())).await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize catalog event");
            }
        }
    }
}
