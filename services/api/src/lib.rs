//! Quiz Generator API Library Crate
//!
//! This library contains the web layer of the quiz service: configuration,
//! application state, the request handler, and routing. The `api` binary is a
//! thin wrapper around this library.

pub mod config;
pub mod handlers;
pub mod models;
pub mod router;
pub mod state;
