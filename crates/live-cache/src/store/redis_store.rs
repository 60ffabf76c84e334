//! Redis implementation of the cache store port

use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::{debug, instrument};

use live_core::error::DomainError;
use live_core::traits::{CacheStore, RepoResult};

use crate::pool::{RedisPool, RedisPoolError};

/// Convert a pool or command failure to DomainError
fn map_cache_error(e: impl Into<RedisPoolError>) -> DomainError {
    DomainError::CacheError(e.into().to_string())
}

/// Cache store backed by a pooled Redis connection
#[derive(Clone, Debug)]
pub struct RedisCacheStore {
    pool: RedisPool,
}

impl RedisCacheStore {
    /// Create a new RedisCacheStore
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }

    async fn conn(&self) -> RepoResult<deadpool_redis::Connection> {
        self.pool.get().await.map_err(map_cache_error)
    }
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    async fn ping(&self) -> RepoResult<()> {
        self.pool.health_check().await.map_err(map_cache_error)
    }

    #[instrument(skip(self))]
    async fn flush_all(&self) -> RepoResult<()> {
        let mut conn = self.conn().await?;
        redis::cmd("FLUSHALL")
            .query_async::<()>(&mut conn)
            .await
            .map_err(map_cache_error)?;
        debug!("Cache flushed");
        Ok(())
    }

    async fn get(&self, key: &str) -> RepoResult<Option<String>> {
        let mut conn = self.conn().await?;
        let value: Option<String> = conn.get(key).await.map_err(map_cache_error)?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> RepoResult<()> {
        let mut conn = self.conn().await?;
        conn.set::<_, _, ()>(key, value)
            .await
            .map_err(map_cache_error)
    }

    async fn del(&self, key: &str) -> RepoResult<()> {
        let mut conn = self.conn().await?;
        conn.del::<_, ()>(key).await.map_err(map_cache_error)
    }

    #[instrument(skip(self, entries), fields(count = entries.len()))]
    async fn mset(&self, entries: &[(String, String)]) -> RepoResult<()> {
        if entries.is_empty() {
            return Ok(());
        }
        let mut conn = self.conn().await?;
        conn.mset::<_, _, ()>(entries).await.map_err(map_cache_error)
    }

    async fn incr(&self, key: &str) -> RepoResult<i64> {
        let mut conn = self.conn().await?;
        let value: i64 = conn.incr(key, 1).await.map_err(map_cache_error)?;
        Ok(value)
    }

    #[instrument(skip(self, values), fields(count = values.len()))]
    async fn lpush(&self, key: &str, values: &[String]) -> RepoResult<()> {
        if values.is_empty() {
            return Ok(());
        }
        let mut conn = self.conn().await?;
        conn.lpush::<_, _, ()>(key, values)
            .await
            .map_err(map_cache_error)
    }

    async fn lrange_all(&self, key: &str) -> RepoResult<Vec<String>> {
        let mut conn = self.conn().await?;
        let values: Vec<String> = conn.lrange(key, 0, -1).await.map_err(map_cache_error)?;
        Ok(values)
    }

    async fn zincr(&self, key: &str, member: &str, delta: i64) -> RepoResult<i64> {
        let mut conn = self.conn().await?;
        let score: f64 = conn
            .zincr(key, member, delta)
            .await
            .map_err(map_cache_error)?;
        Ok(score as i64)
    }

    async fn zrevrank(&self, key: &str, member: &str) -> RepoResult<Option<u64>> {
        let mut conn = self.conn().await?;
        let rank: Option<u64> = conn.zrevrank(key, member).await.map_err(map_cache_error)?;
        Ok(rank)
    }

    async fn zscore(&self, key: &str, member: &str) -> RepoResult<Option<i64>> {
        let mut conn = self.conn().await?;
        let score: Option<f64> = conn.zscore(key, member).await.map_err(map_cache_error)?;
        Ok(score.map(|s| s as i64))
    }
}
