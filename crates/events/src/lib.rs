//! Change-notification fan-out for the movie catalog.
//!
//! - [`EventBus`] — in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`MovieEvent`] — the typed change event carried to live clients.
//! - [`ChangeNotifier`] — the abstract "notify" capability the store calls
//!   after every successful mutation, so the transport can be swapped
//!   without touching storage logic.

pub mod bus;

pub use bus::{ChangeNotifier, EventBus, MovieEvent};
