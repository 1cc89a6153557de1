//! Tagged stand-in used when no cache store is reachable.

use std::time::Duration;

use async_trait::async_trait;

use super::store::{CacheError, CacheStore};

/// Cache store that fails every operation with a tagged
/// [`CacheError::Unavailable`].
///
/// Injected when Redis is unconfigured or unreachable at startup, so the
/// services run their documented degraded path (every read a miss, every
/// write dropped) instead of dereferencing an absent client.
pub struct UnavailableCacheStore {
    reason: String,
}

impl UnavailableCacheStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl CacheStore for UnavailableCacheStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
        Err(CacheError::Unavailable(self.reason.clone()))
    }

    async fn set(&self, _key: &str, _value: &str, _ttl: Duration) -> Result<(), CacheError> {
        Err(CacheError::Unavailable(self.reason.clone()))
    }

    async fn delete(&self, _key: &str) -> Result<(), CacheError> {
        Err(CacheError::Unavailable(self.reason.clone()))
    }
}
