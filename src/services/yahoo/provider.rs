//! Yahoo Finance market data provider implementation

use super::client::YahooRestClient;
use crate::models::PriceSeries;
use crate::services::market_data::{MarketDataError, MarketDataProvider};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::debug;

pub struct YahooMarketDataProvider {
    client: Arc<YahooRestClient>,
}

impl YahooMarketDataProvider {
    pub fn new() -> Result<Self, MarketDataError> {
        Ok(Self::with_client(Arc::new(YahooRestClient::new()?)))
    }

    pub fn with_client(client: Arc<YahooRestClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MarketDataProvider for YahooMarketDataProvider {
    async fn get_history(
        &self,
        symbol: &str,
        lookback: chrono::Duration,
    ) -> Result<PriceSeries, MarketDataError> {
        let now = Utc::now();
        let period1 = (now - lookback).timestamp();
        let period2 = now.timestamp();

        let response = self.client.fetch_chart(symbol, period1, period2).await?;

        if let Some(error) = response.chart.error {
            if error.is_not_found() {
                return Err(MarketDataError::NotFound(symbol.to_string()));
            }
            return Err(MarketDataError::Request(
                error.description.unwrap_or(error.code),
            ));
        }

        let bars = response
            .chart
            .result
            .and_then(|results| results.into_iter().next())
            .map(|result| result.into_bars())
            .unwrap_or_default();

        debug!(symbol = %symbol, count = bars.len(), "Fetched {} daily bars for {}", bars.len(), symbol);
        Ok(PriceSeries::new(bars))
    }
}
