//! Cache-aside batch quote service.
//!
//! The read path for stock prices: probe the cache per symbol, fetch every
//! miss in one upstream batch, write fetched records back with a one-day
//! TTL. Cache failures degrade to misses; fetch failures fail the batch.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use log::{debug, warn};

use fortuneok_market_data::{QuoteFetcher, QuoteRecord};

use crate::cache::{quote_key, CacheStore};
use crate::constants::QUOTE_CACHE_TTL;
use crate::errors::Result;

/// Batch quote lookups.
#[async_trait]
pub trait QuoteServiceTrait: Send + Sync {
    /// Latest price for every resolvable symbol in `symbols`, keyed by the
    /// normalized (upper-cased) symbol. Symbols neither cached nor known
    /// upstream are omitted; an upstream batch failure fails the whole call.
    async fn get_stock_prices(&self, symbols: &[String]) -> Result<HashMap<String, QuoteRecord>>;
}

/// Cache-aside implementation over an injected store and fetcher.
pub struct QuoteService {
    cache: Arc<dyn CacheStore>,
    fetcher: Arc<dyn QuoteFetcher>,
}

impl QuoteService {
    pub fn new(cache: Arc<dyn CacheStore>, fetcher: Arc<dyn QuoteFetcher>) -> Self {
        Self { cache, fetcher }
    }

    /// Probe the cache for one symbol. Any failure, store down or payload
    /// undecodable, degrades to a miss.
    async fn probe(&self, symbol: &str) -> Option<QuoteRecord> {
        let key = quote_key(symbol);
        match self.cache.get(&key).await {
            Ok(Some(payload)) => match serde_json::from_str::<QuoteRecord>(&payload) {
                Ok(record) => Some(record),
                Err(err) => {
                    warn!("Discarding undecodable cache entry {key}: {err}");
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                debug!("Cache read failed for {key}, treating as miss: {err}");
                None
            }
        }
    }

    async fn write_back(&self, symbol: &str, record: &QuoteRecord) {
        let key = quote_key(symbol);
        let payload = match serde_json::to_string(record) {
            Ok(payload) => payload,
            Err(err) => {
                warn!("Could not serialize quote for {key}: {err}");
                return;
            }
        };
        if let Err(err) = self.cache.set(&key, &payload, QUOTE_CACHE_TTL).await {
            warn!("Cache write failed for {key}: {err}");
        }
    }
}

#[async_trait]
impl QuoteServiceTrait for QuoteService {
    async fn get_stock_prices(&self, symbols: &[String]) -> Result<HashMap<String, QuoteRecord>> {
        // Normalize and dedupe, preserving first-seen order for the batch.
        let mut seen = HashSet::new();
        let requested: Vec<String> = symbols
            .iter()
            .map(|s| s.trim().to_uppercase())
            .filter(|s| !s.is_empty() && seen.insert(s.clone()))
            .collect();
        if requested.is_empty() {
            return Ok(HashMap::new());
        }

        let probes = join_all(requested.iter().map(|symbol| self.probe(symbol))).await;

        let mut prices = HashMap::with_capacity(requested.len());
        let mut misses = Vec::new();
        for (symbol, probe) in requested.iter().zip(probes) {
            match probe {
                Some(record) => {
                    prices.insert(symbol.clone(), record);
                }
                None => misses.push(symbol.clone()),
            }
        }

        if misses.is_empty() {
            return Ok(prices);
        }

        debug!(
            "Quote batch: {} cached, fetching {} upstream",
            prices.len(),
            misses.len()
        );
        let fetched = self.fetcher.fetch_quotes(&misses).await?;

        for symbol in &misses {
            match fetched.get(symbol) {
                Some(record) => {
                    self.write_back(symbol, record).await;
                    prices.insert(symbol.clone(), record.clone());
                }
                None => debug!("No quote resolved for '{symbol}', omitting"),
            }
        }

        Ok(prices)
    }
}
