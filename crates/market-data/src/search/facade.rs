//! Two-tier symbol search with absorb-to-empty error handling.

use std::sync::Arc;

use log::{error, warn};

use crate::models::SymbolMatch;
use crate::provider::SymbolSearchSource;

/// Symbol search facade.
///
/// Tries the cached endpoint first and falls back to the direct endpoint;
/// each tier is attempted at most once per call, with no retries. The
/// operation is infallible by contract: every failure is logged and
/// converted to an empty result list.
pub struct SymbolSearch {
    source: Arc<dyn SymbolSearchSource>,
}

impl SymbolSearch {
    pub fn new(source: Arc<dyn SymbolSearchSource>) -> Self {
        Self { source }
    }

    /// Search for symbols matching `query`, optionally narrowed to one
    /// asset type. Empty or whitespace-only queries return an empty list
    /// without touching the network.
    pub async fn search_symbols(&self, query: &str, asset_kind: Option<&str>) -> Vec<SymbolMatch> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        match self.source.search_cached(query, asset_kind).await {
            Ok(matches) => matches,
            Err(err) => {
                warn!("Cached symbol search failed for '{query}', falling back to direct: {err}");
                match self.source.search_direct(query, asset_kind).await {
                    Ok(matches) => matches,
                    Err(err) => {
                        error!("Direct symbol search failed for '{query}': {err}");
                        Vec::new()
                    }
                }
            }
        }
    }
}
