//! FortuneOK Market Data Crate
//!
//! This crate provides upstream market data access for the FortuneOK
//! application: batch symbol quotes, per-base currency conversion tables,
//! and symbol search.
//!
//! # Overview
//!
//! The market data crate supports:
//! - Batch quote fetches (one logical call per batch, all-or-nothing)
//! - Currency conversion tables keyed by base currency
//! - Two-tier symbol search with a debounced caller-side helper
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |  Service Layer   | --> |  QuoteFetcher    |  (batch quotes)
//! |  (cache-aside)   |     |  RateFetcher     |  (conversion tables)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          | HttpQuoteFetcher |  (reqwest adapters)
//!                          | HttpRateFetcher  |
//!                          +------------------+
//!
//! +------------------+     +------------------+
//! |  Interactive UI  | --> |  DebouncedSearch |  (300ms trailing edge)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |   SymbolSearch   |  (cached -> direct tiers)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`QuoteRecord`] - A priced symbol snapshot
//! - [`RateTable`] - Conversion rates for one base currency
//! - [`SymbolMatch`] - One symbol search result row
//! - [`FetchError`] - Upstream failure taxonomy

pub mod errors;
pub mod models;
pub mod provider;
pub mod search;

// Re-export all public types from models
pub use models::{QuoteRecord, RateTable, SymbolMatch, DEFAULT_QUOTE_CURRENCY};

// Re-export provider types
pub use provider::http::{HttpQuoteFetcher, HttpRateFetcher, HttpSearchSource};
pub use provider::{QuoteFetcher, RateFetcher, SymbolSearchSource};

// Re-export search types
pub use search::{DebouncedSearch, SymbolSearch, SEARCH_DEBOUNCE};

// Re-export error types
pub use errors::FetchError;
