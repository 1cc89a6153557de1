//! Upstream fetcher abstractions and the HTTP implementation.
//!
//! This module contains:
//! - The `QuoteFetcher`, `RateFetcher` and `SymbolSearchSource` traits the
//!   cache-aside services and the search facade depend on
//! - The reqwest-backed `HttpQuoteFetcher`, `HttpRateFetcher` and
//!   `HttpSearchSource` adapters
//!
//! The traits are the seams for tests and for swapping upstreams: services
//! hold `Arc<dyn QuoteFetcher>` and never see HTTP details.

mod traits;

pub mod http;

// Re-exports
pub use traits::{QuoteFetcher, RateFetcher, SymbolSearchSource};
