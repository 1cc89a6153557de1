//! Tests for the QuoteService cache-aside contract.
//!
//! # Contract Points
//!
//! 1. Fully-cached batches never touch the fetcher
//! 2. A non-empty miss set produces exactly one fetch covering all misses
//! 3. Cache failures (read, write, corrupt payload) never fail the call
//! 4. An upstream batch failure fails the whole call
//! 5. Unresolvable symbols are omitted, not errors

#[cfg(test)]
mod tests {
    use crate::cache::{quote_key, CacheError, CacheStore};
    use crate::constants::QUOTE_CACHE_TTL;
    use crate::errors::Error;
    use crate::quotes::{QuoteService, QuoteServiceTrait};
    use async_trait::async_trait;
    use fortuneok_market_data::{FetchError, QuoteFetcher, QuoteRecord};
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    // =========================================================================
    // Mock CacheStore
    // =========================================================================

    #[derive(Clone, Default)]
    struct MockCacheStore {
        entries: Arc<Mutex<HashMap<String, String>>>,
        reads: Arc<Mutex<Vec<String>>>,
        writes: Arc<Mutex<Vec<(String, String, Duration)>>>,
        fail_reads: Arc<Mutex<bool>>,
        fail_writes: Arc<Mutex<bool>>,
    }

    impl MockCacheStore {
        fn new() -> Self {
            Self::default()
        }

        fn seed_quote(&self, symbol: &str, record: &QuoteRecord) {
            self.entries.lock().unwrap().insert(
                quote_key(symbol),
                serde_json::to_string(record).unwrap(),
            );
        }

        fn seed_raw(&self, key: &str, payload: &str) {
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), payload.to_string());
        }

        fn set_fail_reads(&self, fail: bool) {
            *self.fail_reads.lock().unwrap() = fail;
        }

        fn set_fail_writes(&self, fail: bool) {
            *self.fail_writes.lock().unwrap() = fail;
        }

        fn read_count(&self) -> usize {
            self.reads.lock().unwrap().len()
        }

        fn writes(&self) -> Vec<(String, String, Duration)> {
            self.writes.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CacheStore for MockCacheStore {
        async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
            self.reads.lock().unwrap().push(key.to_string());
            if *self.fail_reads.lock().unwrap() {
                return Err(CacheError::Unavailable("store offline".into()));
            }
            Ok(self.entries.lock().unwrap().get(key).cloned())
        }

        async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
            if *self.fail_writes.lock().unwrap() {
                return Err(CacheError::Unavailable("store offline".into()));
            }
            self.writes
                .lock()
                .unwrap()
                .push((key.to_string(), value.to_string(), ttl));
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        async fn delete(&self, key: &str) -> Result<(), CacheError> {
            self.entries.lock().unwrap().remove(key);
            Ok(())
        }
    }

    // =========================================================================
    // Mock QuoteFetcher
    // =========================================================================

    #[derive(Clone, Default)]
    struct MockQuoteFetcher {
        calls: Arc<Mutex<Vec<Vec<String>>>>,
        responses: Arc<Mutex<HashMap<String, QuoteRecord>>>,
        fail: Arc<Mutex<bool>>,
    }

    impl MockQuoteFetcher {
        fn new() -> Self {
            Self::default()
        }

        fn resolves(&self, symbol: &str, price: rust_decimal::Decimal) {
            self.responses
                .lock()
                .unwrap()
                .insert(symbol.to_string(), QuoteRecord::new(symbol, price));
        }

        fn set_fail(&self, fail: bool) {
            *self.fail.lock().unwrap() = fail;
        }

        fn calls(&self) -> Vec<Vec<String>> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl QuoteFetcher for MockQuoteFetcher {
        async fn fetch_quotes(
            &self,
            symbols: &[String],
        ) -> Result<HashMap<String, QuoteRecord>, FetchError> {
            self.calls.lock().unwrap().push(symbols.to_vec());
            if *self.fail.lock().unwrap() {
                return Err(FetchError::UpstreamRejection {
                    status: 503,
                    message: "upstream down".to_string(),
                });
            }
            let responses = self.responses.lock().unwrap();
            Ok(symbols
                .iter()
                .filter_map(|s| responses.get(s).map(|r| (s.clone(), r.clone())))
                .collect())
        }
    }

    fn service(cache: &MockCacheStore, fetcher: &MockQuoteFetcher) -> QuoteService {
        QuoteService::new(Arc::new(cache.clone()), Arc::new(fetcher.clone()))
    }

    fn symbols(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    // =========================================================================
    // Tests
    // =========================================================================

    #[tokio::test]
    async fn test_empty_input_touches_nothing() {
        let cache = MockCacheStore::new();
        let fetcher = MockQuoteFetcher::new();
        let service = service(&cache, &fetcher);

        let prices = service.get_stock_prices(&[]).await.unwrap();
        assert!(prices.is_empty());
        assert_eq!(cache.read_count(), 0);
        assert!(fetcher.calls().is_empty());
    }

    #[tokio::test]
    async fn test_fully_cached_batch_skips_fetch() {
        let cache = MockCacheStore::new();
        cache.seed_quote("AAPL", &QuoteRecord::new("AAPL", dec!(150.25)));
        cache.seed_quote("MSFT", &QuoteRecord::new("MSFT", dec!(411.00)));
        let fetcher = MockQuoteFetcher::new();
        let service = service(&cache, &fetcher);

        let prices = service
            .get_stock_prices(&symbols(&["AAPL", "MSFT"]))
            .await
            .unwrap();

        assert_eq!(prices.len(), 2);
        assert_eq!(prices["AAPL"].price, dec!(150.25));
        assert!(fetcher.calls().is_empty());
    }

    #[tokio::test]
    async fn test_cold_cache_fetches_once_and_writes_back() {
        let cache = MockCacheStore::new();
        let fetcher = MockQuoteFetcher::new();
        fetcher.resolves("AAPL", dec!(150.25));
        fetcher.resolves("MSFT", dec!(411.00));
        let service = service(&cache, &fetcher);

        let prices = service
            .get_stock_prices(&symbols(&["AAPL", "MSFT"]))
            .await
            .unwrap();

        assert_eq!(prices.len(), 2);
        assert_eq!(fetcher.calls(), vec![symbols(&["AAPL", "MSFT"])]);

        let writes = cache.writes();
        assert_eq!(writes.len(), 2);
        for (key, payload, ttl) in writes {
            assert!(key.starts_with("symbol_data:"));
            assert_eq!(ttl, QUOTE_CACHE_TTL);
            let cached: QuoteRecord = serde_json::from_str(&payload).unwrap();
            assert_eq!(prices[&cached.symbol], cached);
        }
    }

    #[tokio::test]
    async fn test_partial_hits_fetch_only_misses() {
        let cache = MockCacheStore::new();
        cache.seed_quote("AAPL", &QuoteRecord::new("AAPL", dec!(150.25)));
        let fetcher = MockQuoteFetcher::new();
        fetcher.resolves("MSFT", dec!(411.00));
        let service = service(&cache, &fetcher);

        let prices = service
            .get_stock_prices(&symbols(&["AAPL", "MSFT"]))
            .await
            .unwrap();

        assert_eq!(prices.len(), 2);
        assert_eq!(fetcher.calls(), vec![symbols(&["MSFT"])]);
    }

    #[tokio::test]
    async fn test_duplicates_and_case_collapse() {
        let cache = MockCacheStore::new();
        let fetcher = MockQuoteFetcher::new();
        fetcher.resolves("AAPL", dec!(150.25));
        fetcher.resolves("MSFT", dec!(411.00));
        let service = service(&cache, &fetcher);

        let prices = service
            .get_stock_prices(&symbols(&["aapl", " AAPL ", "msft", ""]))
            .await
            .unwrap();

        assert_eq!(prices.len(), 2);
        assert_eq!(fetcher.calls(), vec![symbols(&["AAPL", "MSFT"])]);
    }

    #[tokio::test]
    async fn test_cache_read_failure_degrades_to_miss() {
        let cache = MockCacheStore::new();
        cache.seed_quote("AAPL", &QuoteRecord::new("AAPL", dec!(150.25)));
        cache.set_fail_reads(true);
        let fetcher = MockQuoteFetcher::new();
        fetcher.resolves("AAPL", dec!(151.00));
        let service = service(&cache, &fetcher);

        let prices = service.get_stock_prices(&symbols(&["AAPL"])).await.unwrap();

        // The seeded entry was unreadable, so the fetched price wins.
        assert_eq!(prices["AAPL"].price, dec!(151.00));
        assert_eq!(fetcher.calls(), vec![symbols(&["AAPL"])]);
    }

    #[tokio::test]
    async fn test_corrupt_cache_entry_refetches() {
        let cache = MockCacheStore::new();
        cache.seed_raw(&quote_key("AAPL"), "not json at all");
        let fetcher = MockQuoteFetcher::new();
        fetcher.resolves("AAPL", dec!(150.25));
        let service = service(&cache, &fetcher);

        let prices = service.get_stock_prices(&symbols(&["AAPL"])).await.unwrap();

        assert_eq!(prices["AAPL"].price, dec!(150.25));
        assert_eq!(fetcher.calls().len(), 1);
        // The corrupt entry was overwritten by the write-back.
        assert_eq!(cache.writes().len(), 1);
    }

    #[tokio::test]
    async fn test_cache_write_failure_still_returns_fetched() {
        let cache = MockCacheStore::new();
        cache.set_fail_writes(true);
        let fetcher = MockQuoteFetcher::new();
        fetcher.resolves("AAPL", dec!(150.25));
        let service = service(&cache, &fetcher);

        let prices = service.get_stock_prices(&symbols(&["AAPL"])).await.unwrap();

        assert_eq!(prices["AAPL"].price, dec!(150.25));
        assert!(cache.writes().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_fails_whole_batch() {
        let cache = MockCacheStore::new();
        cache.seed_quote("AAPL", &QuoteRecord::new("AAPL", dec!(150.25)));
        let fetcher = MockQuoteFetcher::new();
        fetcher.set_fail(true);
        let service = service(&cache, &fetcher);

        let err = service
            .get_stock_prices(&symbols(&["AAPL", "MSFT"]))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Fetch(FetchError::UpstreamRejection { .. })));
        assert!(cache.writes().is_empty());
    }

    #[tokio::test]
    async fn test_unresolvable_symbols_are_omitted() {
        let cache = MockCacheStore::new();
        let fetcher = MockQuoteFetcher::new();
        fetcher.resolves("AAPL", dec!(150.25));
        let service = service(&cache, &fetcher);

        let prices = service
            .get_stock_prices(&symbols(&["AAPL", "NOSUCH"]))
            .await
            .unwrap();

        assert_eq!(prices.len(), 1);
        assert!(prices.contains_key("AAPL"));
        assert!(!prices.contains_key("NOSUCH"));
        // Only the resolved symbol was written back.
        assert_eq!(cache.writes().len(), 1);
    }
}
