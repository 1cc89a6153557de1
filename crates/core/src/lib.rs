//! FortuneOK Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for FortuneOK: the
//! cache-aside quote and conversion-rate services, investment bookkeeping,
//! diagnostic logs, and per-user asset breakdowns. It is storage-agnostic
//! and defines traits that are implemented by the `storage-memory` crate
//! (and by whatever document database backs a real deployment).

pub mod cache;
pub mod constants;
pub mod errors;
pub mod fx;
pub mod investments;
pub mod logs;
pub mod quotes;
pub mod sessions;
pub mod users;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
