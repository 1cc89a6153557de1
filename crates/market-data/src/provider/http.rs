//! HTTP implementations of the fetcher traits.
//!
//! # API Endpoints
//!
//! - Latest quote: `{base_url}/quote/{SYMBOL}` - one priced symbol, 404 for
//!   symbols the upstream does not know
//! - Rate tables: `{base_url}/{base}.json` with a lower-cased base currency;
//!   the body nests the table under a key equal to the base
//! - Symbol search: a cached (pre-indexed) endpoint and a direct (live)
//!   endpoint, both taking `query` and optional `type` parameters
//!
//! # Response Format
//!
//! All endpoints speak JSON. Error bodies carry an `error` field which is
//! surfaced through [`FetchError::upstream_rejection`].

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::future::try_join_all;
use log::debug;
use reqwest::{Client, RequestBuilder, StatusCode};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::FetchError;
use crate::models::{QuoteRecord, RateTable, SymbolMatch, DEFAULT_QUOTE_CURRENCY};
use crate::provider::{QuoteFetcher, RateFetcher, SymbolSearchSource};

/// Default HTTP request timeout; a hung upstream call fails as
/// [`FetchError::Transport`] instead of stalling a whole batch.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

fn build_client() -> Client {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Response from the quote endpoint.
#[derive(Debug, Deserialize)]
struct QuotePayload {
    /// Symbol as the upstream spells it; the requested symbol wins when absent
    #[serde(default)]
    symbol: Option<String>,
    /// Latest price
    price: Decimal,
    /// Quote currency, defaulted when omitted
    #[serde(default)]
    currency: Option<String>,
    /// Price timestamp, defaulted to now when omitted
    #[serde(default)]
    timestamp: Option<DateTime<Utc>>,
}

impl QuotePayload {
    fn into_record(self, requested_symbol: &str) -> QuoteRecord {
        QuoteRecord {
            symbol: self.symbol.unwrap_or_else(|| requested_symbol.to_string()),
            currency: self
                .currency
                .unwrap_or_else(|| DEFAULT_QUOTE_CURRENCY.to_string()),
            price: self.price,
            timestamp: self.timestamp.unwrap_or_else(Utc::now),
        }
    }
}

async fn read_success_body(response: reqwest::Response) -> Result<String, FetchError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(FetchError::upstream_rejection(status.as_u16(), &body));
    }
    Ok(body)
}

/// Quote fetcher for the latest-price endpoint.
///
/// A batch is fanned out into one request per symbol and joined
/// all-or-nothing; any transport failure or upstream rejection fails the
/// whole batch.
pub struct HttpQuoteFetcher {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl HttpQuoteFetcher {
    /// Create a fetcher for the given upstream, with an optional bearer key.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: build_client(),
            base_url: trim_base(base_url.into()),
            api_key,
        }
    }

    fn quote_url(&self, symbol: &str) -> String {
        format!("{}/quote/{}", self.base_url, symbol.trim().to_uppercase())
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.bearer_auth(key),
            None => request,
        }
    }

    /// Fetch one symbol. `Ok(None)` means the upstream answered with 404,
    /// i.e. it does not track this symbol.
    async fn fetch_one(&self, symbol: &str) -> Result<Option<QuoteRecord>, FetchError> {
        let url = self.quote_url(symbol);
        let response = self.authorized(self.client.get(&url)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let body = read_success_body(response).await?;
        let payload: QuotePayload = serde_json::from_str(&body)
            .map_err(|e| FetchError::InvalidPayload(format!("quote for '{symbol}': {e}")))?;
        Ok(Some(payload.into_record(symbol)))
    }
}

#[async_trait]
impl QuoteFetcher for HttpQuoteFetcher {
    async fn fetch_quotes(
        &self,
        symbols: &[String],
    ) -> Result<HashMap<String, QuoteRecord>, FetchError> {
        if symbols.is_empty() {
            return Ok(HashMap::new());
        }

        let fetches = symbols.iter().map(|symbol| self.fetch_one(symbol));
        let results = try_join_all(fetches).await?;

        let mut quotes = HashMap::with_capacity(symbols.len());
        for (symbol, record) in symbols.iter().zip(results) {
            match record {
                Some(record) => {
                    quotes.insert(symbol.clone(), record);
                }
                None => debug!("upstream has no quote for '{symbol}', omitting"),
            }
        }
        Ok(quotes)
    }
}

/// Rate-table fetcher for the per-base currency endpoint.
pub struct HttpRateFetcher {
    client: Client,
    base_url: String,
}

impl HttpRateFetcher {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: build_client(),
            base_url: trim_base(base_url.into()),
        }
    }

    fn rates_url(&self, base_currency: &str) -> String {
        format!(
            "{}/{}.json",
            self.base_url,
            base_currency.trim().to_lowercase()
        )
    }
}

#[async_trait]
impl RateFetcher for HttpRateFetcher {
    async fn fetch_rate_table(
        &self,
        base_currency: &str,
    ) -> Result<Option<RateTable>, FetchError> {
        let base = base_currency.trim().to_lowercase();
        let response = self.client.get(self.rates_url(&base)).send().await?;
        // Unknown bases come back as 404; that is "no table", not a failure.
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let body = read_success_body(response).await?;
        let payload: HashMap<String, serde_json::Value> = serde_json::from_str(&body)
            .map_err(|e| FetchError::InvalidPayload(format!("rate document for '{base}': {e}")))?;
        match payload.get(&base) {
            Some(table) => {
                let table: RateTable = serde_json::from_value(table.clone()).map_err(|e| {
                    FetchError::InvalidPayload(format!("rate table for '{base}': {e}"))
                })?;
                Ok(Some(table))
            }
            None => Ok(None),
        }
    }
}

/// The two symbol search endpoints.
pub struct HttpSearchSource {
    client: Client,
    cached_url: String,
    direct_url: String,
    api_key: Option<String>,
}

impl HttpSearchSource {
    pub fn new(
        cached_url: impl Into<String>,
        direct_url: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client: build_client(),
            cached_url: trim_base(cached_url.into()),
            direct_url: trim_base(direct_url.into()),
            api_key,
        }
    }

    async fn search_at(
        &self,
        url: &str,
        query: &str,
        asset_kind: Option<&str>,
    ) -> Result<Vec<SymbolMatch>, FetchError> {
        let mut request = self.client.get(url).query(&[("query", query)]);
        if let Some(kind) = asset_kind {
            request = request.query(&[("type", kind)]);
        }
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        let body = read_success_body(request.send().await?).await?;
        serde_json::from_str(&body)
            .map_err(|e| FetchError::InvalidPayload(format!("search results: {e}")))
    }
}

#[async_trait]
impl SymbolSearchSource for HttpSearchSource {
    async fn search_cached(
        &self,
        query: &str,
        asset_kind: Option<&str>,
    ) -> Result<Vec<SymbolMatch>, FetchError> {
        self.search_at(&self.cached_url, query, asset_kind).await
    }

    async fn search_direct(
        &self,
        query: &str,
        asset_kind: Option<&str>,
    ) -> Result<Vec<SymbolMatch>, FetchError> {
        self.search_at(&self.direct_url, query, asset_kind).await
    }
}

fn trim_base(mut base_url: String) -> String {
    while base_url.ends_with('/') {
        base_url.pop();
    }
    base_url
}
