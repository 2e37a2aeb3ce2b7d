//! Reelboard API server library.
//!
//! Exposes the core building blocks (config, state, error handling, the
//! movie store, routes, WebSocket infrastructure) so integration tests and
//! the binary entrypoint can both access them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod notifications;
pub mod routes;
pub mod state;
pub mod store;
pub mod ws;
