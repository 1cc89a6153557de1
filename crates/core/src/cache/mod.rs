//! Cache store boundary and implementations.
//!
//! Quotes live under `symbol_data:<SYMBOL>` and conversion-rate tables
//! under `currencyRates:<BASE>`; both key shapes are fixed by the data
//! already present in production caches.

mod memory;
mod redis_store;
mod store;
mod unavailable;

pub use memory::MemoryCacheStore;
pub use redis_store::RedisCacheStore;
pub use store::{CacheError, CacheStore};
pub use unavailable::UnavailableCacheStore;

use std::sync::Arc;

use log::warn;

/// Cache key for one symbol's quote.
pub fn quote_key(symbol: &str) -> String {
    format!("symbol_data:{}", symbol.trim().to_uppercase())
}

/// Cache key for one base currency's rate table.
pub fn rates_key(base_currency: &str) -> String {
    format!("currencyRates:{}", base_currency.trim().to_uppercase())
}

/// Build the process-wide cache store.
///
/// Tries Redis when a URL is configured and degrades to the tagged
/// [`UnavailableCacheStore`] otherwise, so a missing cache turns reads
/// into misses instead of failing requests.
pub async fn connect_cache_store(redis_url: Option<&str>) -> Arc<dyn CacheStore> {
    match redis_url {
        Some(url) => match RedisCacheStore::connect(url).await {
            Ok(store) => Arc::new(store),
            Err(err) => {
                warn!("Cache store unreachable, running without cache: {err}");
                Arc::new(UnavailableCacheStore::new(err.to_string()))
            }
        },
        None => Arc::new(UnavailableCacheStore::new("no cache store configured")),
    }
}
