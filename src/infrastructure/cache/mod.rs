mod cache_factory;
mod memory_cache;
mod redis_cache;

pub use cache_factory::ContentCacheFactory;
pub use memory_cache::InMemoryContentCache;
pub use redis_cache::RedisContentCache;
