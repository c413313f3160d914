//! Redis-backed read cache

use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::{ConnectionManager, ConnectionManagerConfig};
use std::time::Duration;
use tokio::sync::OnceCell;

use super::ReadCache;
use crate::error::CacheResult;

/// Bound on establishing (or re-establishing) the connection
const CONNECTION_TIMEOUT: Duration = Duration::from_secs(1);

/// Bound on a single command round trip
const RESPONSE_TIMEOUT: Duration = Duration::from_secs(1);

/// Process-wide Redis cache.
///
/// Holds one [`ConnectionManager`], created on first use and shared by every
/// call; it reconnects by itself after a drop. Until the first connect
/// succeeds each call makes one bounded attempt, so the service starts and
/// serves reads from the store while Redis is down.
pub struct RedisCache {
    client: redis::Client,
    conn: OnceCell<ConnectionManager>,
}

impl RedisCache {
    /// Parse the URL. Does not connect.
    pub fn new(redis_url: &str) -> CacheResult<Self> {
        let client = redis::Client::open(redis_url)?;
        Ok(Self {
            client,
            conn: OnceCell::new(),
        })
    }

    fn manager_config() -> ConnectionManagerConfig {
        ConnectionManagerConfig::new()
            .set_connection_timeout(CONNECTION_TIMEOUT)
            .set_response_timeout(RESPONSE_TIMEOUT)
            .set_number_of_retries(1)
    }

    async fn connection(&self) -> CacheResult<ConnectionManager> {
        let conn = self
            .conn
            .get_or_try_init(|| async {
                let conn =
                    ConnectionManager::new_with_config(self.client.clone(), Self::manager_config())
                        .await?;
                tracing::info!("Redis cache connected");
                Ok::<_, redis::RedisError>(conn)
            })
            .await?;
        Ok(conn.clone())
    }
}

#[async_trait]
impl ReadCache for RedisCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let mut conn = self.connection().await?;
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> CacheResult<()> {
        let mut conn = self.connection().await?;
        // EX 0 is rejected by Redis
        let seconds = ttl.as_secs().max(1);
        conn.set_ex::<_, _, ()>(key, value, seconds).await?;
        Ok(())
    }

    async fn del(&self, keys: &[String]) -> CacheResult<()> {
        if keys.is_empty() {
            return Ok(());
        }
        let mut conn = self.connection().await?;
        conn.del::<_, ()>(keys).await?;
        Ok(())
    }
}
