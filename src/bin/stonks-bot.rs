//! Stonks Bot Server
//!
//! Telegram webhook server answering ticker queries and watchlist commands
//! with overbought/oversold signals.

use dotenvy::dotenv;
use stonks::bot::{BotDispatcher, TelegramClient};
use stonks::config;
use stonks::core::http::{start_server, AppState};
use stonks::logging;
use stonks::metrics::Metrics;
use stonks::services::YahooMarketDataProvider;
use stonks::signals::SignalEngine;
use stonks::watchlist::{InMemoryWatchlistStore, RedisWatchlistStore, WatchlistStore};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env if present
    dotenv().ok();

    let env = config::get_environment();
    let log_format = logging::init_logging(&env);

    let port = config::get_port();
    info!("Starting Stonks Bot");
    info!(environment = %env, log_format = ?log_format, "Environment");
    info!(port = port, "HTTP Server: http://0.0.0.0:{}", port);

    let metrics = Arc::new(Metrics::new()?);

    let provider = Arc::new(YahooMarketDataProvider::new()?);
    let engine = Arc::new(SignalEngine::new(provider));

    let redis_url = config::get_redis_url();
    let watchlist: Arc<dyn WatchlistStore> = match RedisWatchlistStore::connect(&redis_url).await {
        Ok(store) => {
            metrics.watchlist_store_connected.set(1.0);
            Arc::new(store)
        }
        Err(e) => {
            warn!(error = %e, "Failed to connect to Redis - watchlists will be kept in memory only");
            Arc::new(InMemoryWatchlistStore::new())
        }
    };

    let telegram = match config::get_telegram_token() {
        Some(token) => Some(Arc::new(TelegramClient::new(token)?)),
        None => {
            warn!("TELEGRAM_API_TOKEN not set - replies are only returned in webhook responses");
            None
        }
    };

    let dispatcher = Arc::new(BotDispatcher::new(engine, watchlist).with_metrics(metrics.clone()));
    let state = AppState::new(metrics, dispatcher, telegram);

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(port, state).await {
            error!(error = %e, "HTTP server error");
        }
    });

    info!("Bot server started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down bot server...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
