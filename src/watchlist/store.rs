//! Watchlist store interface and in-memory implementation.

use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap};
use thiserror::Error;
use tokio::sync::RwLock;

#[derive(Debug, Error)]
pub enum WatchlistError {
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("watchlist store unavailable: {0}")]
    Connection(String),
}

#[async_trait]
pub trait WatchlistStore: Send + Sync {
    /// Symbols watched by `chat_id`, sorted alphabetically.
    async fn list_symbols(&self, chat_id: &str) -> Result<Vec<String>, WatchlistError>;

    async fn add_symbols(&self, chat_id: &str, symbols: &[String]) -> Result<(), WatchlistError>;

    async fn remove_symbols(&self, chat_id: &str, symbols: &[String]) -> Result<(), WatchlistError>;
}

#[derive(Debug, Default)]
pub struct InMemoryWatchlistStore {
    lists: RwLock<HashMap<String, BTreeSet<String>>>,
}

impl InMemoryWatchlistStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WatchlistStore for InMemoryWatchlistStore {
    async fn list_symbols(&self, chat_id: &str) -> Result<Vec<String>, WatchlistError> {
        let lists = self.lists.read().await;
        Ok(lists
            .get(chat_id)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default())
    }

    async fn add_symbols(&self, chat_id: &str, symbols: &[String]) -> Result<(), WatchlistError> {
        let mut lists = self.lists.write().await;
        lists
            .entry(chat_id.to_string())
            .or_default()
            .extend(symbols.iter().cloned());
        Ok(())
    }

    async fn remove_symbols(&self, chat_id: &str, symbols: &[String]) -> Result<(), WatchlistError> {
        let mut lists = self.lists.write().await;
        if let Some(set) = lists.get_mut(chat_id) {
            for symbol in symbols {
                set.remove(symbol);
            }
            if set.is_empty() {
                lists.remove(chat_id);
            }
        }
        Ok(())
    }
}
