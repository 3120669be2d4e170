//! Per-chat watchlists.

pub mod redis_store;
pub mod store;

pub use redis_store::RedisWatchlistStore;
pub use store::{InMemoryWatchlistStore, WatchlistError, WatchlistStore};
