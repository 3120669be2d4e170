//! Stonks: overbought/oversold signals for stocks, served through a Telegram bot.

pub mod bot;
pub mod common;
pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod signals;
pub mod watchlist;

pub use models::{PriceBar, PriceSeries, SignalState, SymbolReport, WatchlistPartition};
pub use signals::{SignalEngine, SignalError};
