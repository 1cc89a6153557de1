//! The cache store boundary.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the key/value cache store.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The store cannot be reached, or caching is disabled for this process.
    #[error("Cache unavailable: {0}")]
    Unavailable(String),

    /// The store answered but the command failed.
    #[error("Cache command failed: {0}")]
    Operation(String),

    /// A cached payload could not be encoded or decoded.
    #[error("Cache payload error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Key/value cache with per-entry TTLs.
///
/// Payloads are opaque strings; callers (de)serialize JSON themselves.
/// The cache-aside services treat every operation as best-effort: a failed
/// read counts as a miss and a failed write is logged and ignored.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Read a value. `Ok(None)` means the key is absent or expired.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Write a value with a TTL.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError>;

    /// Remove a key. Removing an absent key is not an error.
    async fn delete(&self, key: &str) -> Result<(), CacheError>;
}
