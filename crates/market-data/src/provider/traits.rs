//! Fetcher trait definitions.
//!
//! These traits describe the upstream boundary: batch quotes, per-base
//! conversion tables, and the two symbol search endpoints.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::errors::FetchError;
use crate::models::{QuoteRecord, RateTable, SymbolMatch};

/// Batch quote fetching.
///
/// One call covers one batch. The contract is all-or-nothing: if any
/// underlying request fails with a transport error or an upstream
/// rejection, the whole batch fails. Symbols the upstream answers for but
/// does not recognize are silently omitted from the returned map.
#[async_trait]
pub trait QuoteFetcher: Send + Sync {
    /// Fetch the latest quote for every symbol in `symbols`.
    ///
    /// Returns a map keyed by the requested symbol. An empty input slice
    /// must short-circuit to an empty map with no network activity.
    async fn fetch_quotes(
        &self,
        symbols: &[String],
    ) -> Result<HashMap<String, QuoteRecord>, FetchError>;
}

/// Conversion-rate table fetching.
#[async_trait]
pub trait RateFetcher: Send + Sync {
    /// Fetch the rate table for `base_currency`.
    ///
    /// `Ok(None)` means the upstream answered but has no table for this
    /// base; callers must not treat that as a failure.
    async fn fetch_rate_table(
        &self,
        base_currency: &str,
    ) -> Result<Option<RateTable>, FetchError>;
}

/// The two symbol search endpoints behind the search facade.
///
/// Both tiers are fallible here; [`crate::search::SymbolSearch`] owns the
/// fallback policy and converts failures to empty results.
#[async_trait]
pub trait SymbolSearchSource: Send + Sync {
    /// Query the cached (pre-indexed) search endpoint.
    async fn search_cached(
        &self,
        query: &str,
        asset_kind: Option<&str>,
    ) -> Result<Vec<SymbolMatch>, FetchError>;

    /// Query the direct (live) search endpoint.
    async fn search_direct(
        &self,
        query: &str,
        asset_kind: Option<&str>,
    ) -> Result<Vec<SymbolMatch>, FetchError>;
}
