//! # live-cache
//!
//! Cache layer holding every derived aggregate of the primary store: the tag catalog,
//! per-livestream tag and tip indexes, viewer/reaction/report counters, the
//! livestream → owner lookup, and the two reaction leaderboards.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Stores**: [`RedisCacheStore`] and the in-process [`MemoryCacheStore`], both behind
//!   [`live_core::CacheStore`]
//! - **Keys**: the one place cache keys and value encodings are defined
//! - **DerivedCache**: typed facade applying the cache-miss rules (counters default to
//!   zero, owner and leaderboard lookups must exist)
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use live_cache::{DerivedCache, RedisCacheStore, RedisPool, RedisPoolConfig};
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//! let cache = DerivedCache::new(Arc::new(RedisCacheStore::new(pool)));
//!
//! cache.incr_viewers(livestream_id).await?;
//! let viewers = cache.viewers(livestream_id).await?;
//! ```

pub mod derived;
pub mod keys;
pub mod pool;
pub mod store;

pub use derived::DerivedCache;
pub use keys::Leaderboard;
pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};
pub use store::{CacheValue, MemoryCacheStore, RedisCacheStore};
