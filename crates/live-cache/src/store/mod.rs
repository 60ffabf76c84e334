//! Cache store implementations

mod memory_store;
mod redis_store;

pub use memory_store::{CacheValue, MemoryCacheStore};
pub use redis_store::RedisCacheStore;
