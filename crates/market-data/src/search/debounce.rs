//! Trailing-edge debounce wrapper for interactive search callers.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::models::SymbolMatch;
use crate::search::SymbolSearch;

/// Quiet window a search call must survive before it is dispatched.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Trailing-edge debouncer around [`SymbolSearch`].
///
/// Every call starts a fresh window; a newer call supersedes all pending
/// ones, so within any burst only the final call (with its arguments)
/// reaches the inner search. Superseded calls resolve to `None`.
pub struct DebouncedSearch {
    inner: Arc<SymbolSearch>,
    delay: Duration,
    generation: AtomicU64,
}

impl DebouncedSearch {
    pub fn new(inner: Arc<SymbolSearch>) -> Self {
        Self::with_delay(inner, SEARCH_DEBOUNCE)
    }

    /// Override the debounce window, mainly for tests.
    pub fn with_delay(inner: Arc<SymbolSearch>, delay: Duration) -> Self {
        Self {
            inner,
            delay,
            generation: AtomicU64::new(0),
        }
    }

    /// Debounced [`SymbolSearch::search_symbols`]. Returns `None` when a
    /// newer call arrived during this call's window.
    pub async fn search_symbols(
        &self,
        query: &str,
        asset_kind: Option<&str>,
    ) -> Option<Vec<SymbolMatch>> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.delay).await;
        if self.generation.load(Ordering::SeqCst) != ticket {
            return None;
        }
        Some(self.inner.search_symbols(query, asset_kind).await)
    }
}
