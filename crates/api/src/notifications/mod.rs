//! Fan-out of catalog change events to live WebSocket clients.

mod router;

pub use router::NotificationRouter;
