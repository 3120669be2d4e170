//! Redis-backed watchlist: one set per chat under `watchlist:{chat_id}`.

use crate::watchlist::store::{WatchlistError, WatchlistStore};
use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use std::time::Duration;
use tracing::{debug, info, warn};

const KEY_PREFIX: &str = "watchlist";

#[derive(Clone)]
pub struct RedisWatchlistStore {
    conn: ConnectionManager,
}

impl RedisWatchlistStore {
    /// Connect with exponential backoff (3 attempts).
    pub async fn connect(redis_url: &str) -> Result<Self, WatchlistError> {
        let client = redis::Client::open(redis_url)?;

        let conn = (|| async { ConnectionManager::new(client.clone()).await })
            .retry(
                ExponentialBuilder::default()
                    .with_min_delay(Duration::from_millis(200))
                    .with_max_times(3),
            )
            .notify(|e: &redis::RedisError, delay: Duration| {
                warn!(error = %e, delay_ms = delay.as_millis() as u64, "Redis connection failed, retrying");
            })
            .await
            .map_err(|e| WatchlistError::Connection(e.to_string()))?;

        info!("Redis watchlist store connected");
        Ok(Self { conn })
    }

    fn key(chat_id: &str) -> String {
        format!("{}:{}", KEY_PREFIX, chat_id)
    }
}

#[async_trait]
impl WatchlistStore for RedisWatchlistStore {
    async fn list_symbols(&self, chat_id: &str) -> Result<Vec<String>, WatchlistError> {
        let mut conn = self.conn.clone();
        let mut symbols: Vec<String> = conn.smembers(Self::key(chat_id)).await?;
        symbols.sort();
        Ok(symbols)
    }

    async fn add_symbols(&self, chat_id: &str, symbols: &[String]) -> Result<(), WatchlistError> {
        if symbols.is_empty() {
            return Ok(());
        }
        let mut conn = self.conn.clone();
        let added: usize = conn.sadd(Self::key(chat_id), symbols).await?;
        debug!(chat_id = %chat_id, added = added, "Added {} symbols to watchlist", added);
        Ok(())
    }

    async fn remove_symbols(&self, chat_id: &str, symbols: &[String]) -> Result<(), WatchlistError> {
        if symbols.is_empty() {
            return Ok(());
        }
        let mut conn = self.conn.clone();
        let removed: usize = conn.srem(Self::key(chat_id), symbols).await?;
        debug!(chat_id = %chat_id, removed = removed, "Removed {} symbols from watchlist", removed);
        Ok(())
    }
}
