//! Routes chat text to the signal engine and the watchlist store.
//!
//! Every path returns the reply text; failures become a message for the chat
//! and are logged, they are never propagated.

use crate::bot::commands::{parse_message, Command, Incoming};
use crate::metrics::Metrics;
use crate::services::market_data::MarketDataError;
use crate::signals::{partition, render_partition, render_report, SignalEngine};
use crate::watchlist::WatchlistStore;
use std::sync::Arc;
use tracing::{error, info};

pub struct BotDispatcher {
    engine: Arc<SignalEngine>,
    watchlist: Arc<dyn WatchlistStore>,
    metrics: Option<Arc<Metrics>>,
}

impl BotDispatcher {
    pub fn new(engine: Arc<SignalEngine>, watchlist: Arc<dyn WatchlistStore>) -> Self {
        Self {
            engine,
            watchlist,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<Metrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn engine(&self) -> &Arc<SignalEngine> {
        &self.engine
    }

    /// Reply to one inbound message from `chat_id`.
    pub async fn handle_text(&self, chat_id: &str, text: &str) -> String {
        match parse_message(text) {
            Incoming::Command { name, params } => self.follow_command(chat_id, &name, &params).await,
            Incoming::Symbol(symbol) => self.check_stock_signal(&symbol).await,
        }
    }

    pub async fn check_stock_signal(&self, symbol: &str) -> String {
        match self.engine.get_report(symbol).await {
            Ok(report) => {
                self.record(report.overall.as_str());
                render_report(&report)
            }
            Err(e) => {
                self.record("failed");
                let text = format!("Failed to retrieve data for '{}' due to {}", symbol, e);
                error!(symbol = %symbol, kind = e.kind(), error = %e, "{}", text);
                text
            }
        }
    }

    pub async fn follow_command(&self, chat_id: &str, command: &str, params: &[String]) -> String {
        match Command::parse(command) {
            Some(Command::Check) => self.check_watchlist_signals(chat_id).await,
            Some(Command::List) => self.show_watchlist(chat_id).await,
            Some(Command::Watch) => self.watch_stocks(chat_id, params).await,
            Some(Command::Unwatch) => self.unwatch_stocks(chat_id, params).await,
            None => format!("'{}' is not a valid command", command),
        }
    }

    async fn check_watchlist_signals(&self, chat_id: &str) -> String {
        let symbols = match self.watchlist.list_symbols(chat_id).await {
            Ok(symbols) => symbols,
            Err(e) => {
                let text = format!("Failed to fetch your watchlist due to {}", e);
                error!(chat_id = %chat_id, error = %e, "{}", text);
                return text;
            }
        };

        if symbols.is_empty() {
            return empty_watchlist_text();
        }

        let result = partition(&self.engine, &symbols).await;
        info!(
            chat_id = %chat_id,
            watched = symbols.len(),
            overbought = result.overbought.len(),
            oversold = result.oversold.len(),
            "Checked watchlist"
        );
        render_partition(&result)
    }

    async fn show_watchlist(&self, chat_id: &str) -> String {
        match self.watchlist.list_symbols(chat_id).await {
            Ok(symbols) if symbols.is_empty() => empty_watchlist_text(),
            Ok(symbols) => format!("Your watchlist:\n{}", symbols.join("\n")),
            Err(e) => {
                let text = format!("Failed to fetch your watchlist due to {}", e);
                error!(chat_id = %chat_id, error = %e, "{}", text);
                text
            }
        }
    }

    async fn watch_stocks(&self, chat_id: &str, symbols: &[String]) -> String {
        let symbols = normalize(symbols);
        if symbols.is_empty() {
            return usage_text(Command::Watch);
        }

        if let Err(e) = self.ensure_symbols_exist(&symbols).await {
            let text = format!("Failed to add {} to watchlist due to {}", symbols.join(", "), e);
            error!(chat_id = %chat_id, error = %e, "{}", text);
            return text;
        }

        match self.watchlist.add_symbols(chat_id, &symbols).await {
            Ok(()) => format!("Added {} to watchlist", symbols.join(", ")),
            Err(e) => {
                let text = format!("Failed to add {} to watchlist due to {}", symbols.join(", "), e);
                error!(chat_id = %chat_id, error = %e, "{}", text);
                text
            }
        }
    }

    async fn unwatch_stocks(&self, chat_id: &str, symbols: &[String]) -> String {
        let symbols = normalize(symbols);
        if symbols.is_empty() {
            return usage_text(Command::Unwatch);
        }

        match self.watchlist.remove_symbols(chat_id, &symbols).await {
            Ok(()) => format!("Removed {} from watchlist", symbols.join(", ")),
            Err(e) => {
                let text = format!(
                    "Failed to remove {} from watchlist due to {}",
                    symbols.join(", "),
                    e
                );
                error!(chat_id = %chat_id, error = %e, "{}", text);
                text
            }
        }
    }

    /// A single unknown symbol rejects the whole `/watch`.
    async fn ensure_symbols_exist(&self, symbols: &[String]) -> Result<(), MarketDataError> {
        let lookback = self.engine.config().lookback();
        for symbol in symbols {
            let series = self.engine.provider().get_history(symbol, lookback).await?;
            if series.is_empty() {
                return Err(MarketDataError::NotFound(symbol.clone()));
            }
        }
        Ok(())
    }

    fn record(&self, outcome: &str) {
        if let Some(ref metrics) = self.metrics {
            metrics.record_report(outcome);
        }
    }
}

fn normalize(symbols: &[String]) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(symbols.len());
    for symbol in symbols.iter().map(|s| s.trim().to_uppercase()) {
        if !symbol.is_empty() && !normalized.contains(&symbol) {
            normalized.push(symbol);
        }
    }
    normalized
}

fn empty_watchlist_text() -> String {
    format!(
        "Your watchlist is empty.\nStart watching tickers with the {} command.",
        Command::Watch
    )
}

fn usage_text(command: Command) -> String {
    format!(
        "No ticker was given.\nPlease use the {} command in the following form:\n{} <ticker>",
        command, command
    )
}
