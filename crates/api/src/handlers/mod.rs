//! HTTP request handlers.

pub mod movie;
