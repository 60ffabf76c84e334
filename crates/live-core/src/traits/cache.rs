//! Cache store trait (port) - the key/value and sorted-set store holding derived data
//!
//! Method names follow the Redis commands they map onto. Implementations must be
//! atomic per call; nothing here spans more than one command.

use async_trait::async_trait;

use super::RepoResult;

#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Check that the store is reachable
    async fn ping(&self) -> RepoResult<()>;

    /// Drop every key
    async fn flush_all(&self) -> RepoResult<()>;

    /// GET; `None` when the key is absent
    async fn get(&self, key: &str) -> RepoResult<Option<String>>;

    /// SET
    async fn set(&self, key: &str, value: &str) -> RepoResult<()>;

    /// DEL; a no-op when the key is absent
    async fn del(&self, key: &str) -> RepoResult<()>;

    /// MSET; a no-op for an empty slice
    async fn mset(&self, entries: &[(String, String)]) -> RepoResult<()>;

    /// INCR; returns the value after the increment
    async fn incr(&self, key: &str) -> RepoResult<i64>;

    /// LPUSH; each value goes to the head in slice order. A no-op for an empty slice.
    async fn lpush(&self, key: &str, values: &[String]) -> RepoResult<()>;

    /// LRANGE key 0 -1
    async fn lrange_all(&self, key: &str) -> RepoResult<Vec<String>>;

    /// ZINCRBY; returns the member's new score
    async fn zincr(&self, key: &str, member: &str, delta: i64) -> RepoResult<i64>;

    /// ZREVRANK; 0-based position by descending score, `None` for an unknown member.
    /// Members with equal scores are ordered by descending byte-wise member value.
    async fn zrevrank(&self, key: &str, member: &str) -> RepoResult<Option<u64>>;

    /// ZSCORE
    async fn zscore(&self, key: &str, member: &str) -> RepoResult<Option<i64>>;
}
