//! Read cache for order lists
//!
//! Entries expire by time only; nothing on the write path invalidates them.

mod redis_cache;

pub use redis_cache::RedisCache;

use async_trait::async_trait;
use std::time::Duration;

use crate::error::CacheResult;

/// Lifetime of a cached order list
pub const ORDERS_CACHE_TTL: Duration = Duration::from_secs(10 * 60);

/// Key prefix for order lists: orders:product:{product_id}
const ORDERS_KEY_PREFIX: &str = "orders:product:";

/// Cache key holding the order list of one product
pub fn orders_cache_key(product_id: &str) -> String {
    format!("{ORDERS_KEY_PREFIX}{product_id}")
}

/// Time-bounded key/value cache
#[async_trait]
pub trait ReadCache: Send + Sync {
    /// `Ok(None)` when the key is absent or expired
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Write with absolute expiry `ttl` from now
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()>;

    /// Remove keys; missing keys are not an error
    async fn del(&self, keys: &[String]) -> CacheResult<()>;
}
