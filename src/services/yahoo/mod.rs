//! Yahoo Finance daily chart provider

pub mod client;
pub mod messages;
pub mod provider;

pub use client::YahooRestClient;
pub use provider::YahooMarketDataProvider;
