//! Cache-aside conversion-rate service.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, error, warn};

use fortuneok_market_data::{RateFetcher, RateTable};

use crate::cache::{rates_key, CacheStore};
use crate::constants::RATES_CACHE_TTL;

/// Conversion-rate lookups.
#[async_trait]
pub trait RateServiceTrait: Send + Sync {
    /// The rate table for `base_currency`, from cache or upstream.
    ///
    /// Infallible by contract: any failure past this boundary resolves to
    /// `None` (logged), which callers render as an empty table.
    async fn get_conversion_rates(&self, base_currency: &str) -> Option<RateTable>;
}

/// Cache-aside implementation over an injected store and fetcher.
pub struct RateService {
    cache: Arc<dyn CacheStore>,
    fetcher: Arc<dyn RateFetcher>,
}

impl RateService {
    pub fn new(cache: Arc<dyn CacheStore>, fetcher: Arc<dyn RateFetcher>) -> Self {
        Self { cache, fetcher }
    }

    /// Currency codes are three ASCII letters; anything else would only
    /// produce an upstream miss, so it is rejected before the cache probe.
    fn normalize(base_currency: &str) -> Option<String> {
        let base = base_currency.trim().to_uppercase();
        if base.len() == 3 && base.chars().all(|c| c.is_ascii_alphabetic()) {
            Some(base)
        } else {
            None
        }
    }
}

#[async_trait]
impl RateServiceTrait for RateService {
    async fn get_conversion_rates(&self, base_currency: &str) -> Option<RateTable> {
        let Some(base) = Self::normalize(base_currency) else {
            warn!("Ignoring conversion-rate request for invalid base '{base_currency}'");
            return None;
        };
        let key = rates_key(&base);

        match self.cache.get(&key).await {
            Ok(Some(payload)) => match serde_json::from_str::<RateTable>(&payload) {
                Ok(table) => return Some(table),
                Err(err) => warn!("Discarding undecodable cache entry {key}: {err}"),
            },
            Ok(None) => {}
            Err(err) => debug!("Cache read failed for {key}, treating as miss: {err}"),
        }

        match self.fetcher.fetch_rate_table(&base).await {
            Ok(Some(table)) => {
                match serde_json::to_string(&table) {
                    Ok(payload) => {
                        if let Err(err) = self.cache.set(&key, &payload, RATES_CACHE_TTL).await {
                            warn!("Cache write failed for {key}: {err}");
                        }
                    }
                    Err(err) => warn!("Could not serialize rate table for {key}: {err}"),
                }
                Some(table)
            }
            Ok(None) => {
                debug!("Upstream has no rate table for base '{base}'");
                None
            }
            Err(err) => {
                error!("Conversion-rate fetch failed for base '{base}': {err}");
                None
            }
        }
    }
}
