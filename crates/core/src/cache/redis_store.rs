//! Redis-backed cache store.

use std::time::Duration;

use async_trait::async_trait;
use log::info;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, RedisError};

use super::store::{CacheError, CacheStore};

const RETRY_EXPONENT_BASE: u64 = 2;
const RETRY_FACTOR_MILLIS: u64 = 100;
const MAX_COMMAND_RETRIES: usize = 6;

/// Cache store backed by a single multiplexed Redis connection.
///
/// The connection manager re-establishes a dropped connection in the
/// background and retries individual commands with capped exponential
/// backoff, up to [`MAX_COMMAND_RETRIES`] attempts per command.
pub struct RedisCacheStore {
    conn: ConnectionManager,
}

impl RedisCacheStore {
    /// Connect to Redis. The returned store shares one connection for the
    /// whole process; clone the `Arc` it is wrapped in, not the store.
    pub async fn connect(url: &str) -> Result<Self, CacheError> {
        let client = redis::Client::open(url).map_err(unavailable)?;
        let conn = ConnectionManager::new_with_backoff(
            client,
            RETRY_EXPONENT_BASE,
            RETRY_FACTOR_MILLIS,
            MAX_COMMAND_RETRIES,
        )
        .await
        .map_err(unavailable)?;
        info!("Connected to Redis cache store");
        Ok(Self { conn })
    }
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.conn.clone();
        conn.get(key).await.map_err(classify)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();
        // SETEX rejects a zero expiry.
        let ttl_secs = ttl.as_secs().max(1);
        conn.set_ex(key, value, ttl_secs).await.map_err(classify)
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();
        conn.del(key).await.map_err(classify)
    }
}

fn unavailable(err: RedisError) -> CacheError {
    CacheError::Unavailable(err.to_string())
}

fn classify(err: RedisError) -> CacheError {
    if err.is_io_error()
        || err.is_connection_refusal()
        || err.is_connection_dropped()
        || err.is_timeout()
    {
        CacheError::Unavailable(err.to_string())
    } else {
        CacheError::Operation(err.to_string())
    }
}
