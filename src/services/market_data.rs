//! Market data provider interface.

use crate::models::PriceSeries;
use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("'{0}' not found")]
    NotFound(String),

    #[error("market data request failed: {0}")]
    Request(String),

    #[error("invalid market data response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for MarketDataError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            MarketDataError::Decode(e.to_string())
        } else {
            MarketDataError::Request(e.to_string())
        }
    }
}

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Daily bars for `symbol` covering at least `lookback`, oldest first.
    ///
    /// An unknown symbol is either `NotFound` or an empty series.
    async fn get_history(
        &self,
        symbol: &str,
        lookback: chrono::Duration,
    ) -> Result<PriceSeries, MarketDataError>;
}

/// Fixed series keyed by upper-cased symbol; ignores `lookback`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMarketDataProvider {
    series: HashMap<String, PriceSeries>,
}

impl InMemoryMarketDataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_series(mut self, symbol: &str, series: PriceSeries) -> Self {
        self.insert(symbol, series);
        self
    }

    pub fn insert(&mut self, symbol: &str, series: PriceSeries) {
        self.series.insert(symbol.to_uppercase(), series);
    }
}

#[async_trait]
impl MarketDataProvider for InMemoryMarketDataProvider {
    async fn get_history(
        &self,
        symbol: &str,
        _lookback: chrono::Duration,
    ) -> Result<PriceSeries, MarketDataError> {
        self.series
            .get(&symbol.to_uppercase())
            .cloned()
            .ok_or_else(|| MarketDataError::NotFound(symbol.to_string()))
    }
}
