//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the fan-out hub for [`MovieEvent`]s. It is designed to
//! be shared via `Arc<EventBus>` across the application. Delivery is
//! at-most-once per currently-subscribed receiver: there is no backfill
//! for late subscribers and slow receivers observe `Lagged`.

use reelboard_core::types::DbId;
use reelboard_db::models::movie::Movie;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

// ---------------------------------------------------------------------------
// MovieEvent
// ---------------------------------------------------------------------------

/// A change to the movie catalog.
///
/// Created and updated events carry the fully-populated row so clients can
/// patch their local view without a refetch; deletions carry the id.
///
/// Serializes to tagged JSON, e.g.
/// `{"type":"movie_created","movie":{...}}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MovieEvent {
    MovieCreated { movie: Movie },
    MovieUpdated { movie: Movie },
    MovieDeleted { id: DbId },
}

impl MovieEvent {
    /// The id of the movie this event concerns.
    pub fn movie_id(&self) -> DbId {
        match self {
            MovieEvent::MovieCreated { movie } | MovieEvent::MovieUpdated { movie } => movie.id,
            MovieEvent::MovieDeleted { id } => *id,
        }
    }
}

// ---------------------------------------------------------------------------
// ChangeNotifier
// ---------------------------------------------------------------------------

/// The abstract notification capability the store depends on.
///
/// Issuing the event to the transport is all the contract requires; no
/// implementation waits for individual client acknowledgment.
pub trait ChangeNotifier: Send + Sync {
    /// Announce a catalog change to all current subscribers, best-effort.
    fn movie_changed(&self, event: MovieEvent);
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
///
/// Wraps a [`broadcast::Sender`] so that any number of subscribers can
/// independently receive every published [`MovieEvent`].
///
/// # Usage
///
/// ```rust
/// use reelboard_events::bus::{EventBus, MovieEvent};
///
/// let bus = EventBus::default();
/// let mut rx = bus.subscribe();
///
/// bus.publish(MovieEvent::MovieDeleted { id: 1 });
/// ```
pub struct EventBus {
    sender: broadcast::Sender<MovieEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed messages are dropped
    /// and slow receivers will observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// If there are no active subscribers the event is silently dropped.
    pub fn publish(&self, event: MovieEvent) {
        // Ignore the SendError — it only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Subscribe to all events published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<MovieEvent> {
        self.sender.subscribe()
    }
}

impl ChangeNotifier for EventBus {
    fn movie_changed(&self, event: MovieEvent) {
        tracing::debug!(movie_id = event.movie_id(), "Publishing catalog change");
        self.publish(event);
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
