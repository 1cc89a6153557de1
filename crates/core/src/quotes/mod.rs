//! Cache-aside batch quote lookups.
//!
//! ```text
//! QuoteService → CacheStore (symbol_data:<SYMBOL>, 1 day TTL)
//!       ↓ misses
//! QuoteFetcher (one upstream batch, all-or-nothing)
//! ```

pub mod service;

#[cfg(test)]
mod service_tests;

pub use service::{QuoteService, QuoteServiceTrait};
