//! FortuneOK HTTP server.
//!
//! Exposed as a library so integration tests can assemble the router
//! exactly the way `main` does.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod main_lib;

pub use main_lib::{build_state, init_tracing, AppState};
