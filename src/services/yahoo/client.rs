//! Yahoo chart REST client

use super::messages::ChartResponse;
use crate::config;
use crate::services::market_data::MarketDataError;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;
use url::Url;

const USER_AGENT: &str = "Mozilla/5.0 (compatible; stonks-bot/0.1)";

pub struct YahooRestClient {
    base_url: String,
    client: reqwest::Client,
}

impl YahooRestClient {
    pub fn new() -> Result<Self, MarketDataError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self::with_client(config::get_yahoo_base_url(), client))
    }

    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            client,
        }
    }

    /// `GET /v8/finance/chart/{symbol}` with daily bars between two unix timestamps.
    pub fn chart_url(&self, symbol: &str, period1: i64, period2: i64) -> Result<Url, MarketDataError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| MarketDataError::Request(format!("invalid base url {}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| MarketDataError::Request(format!("invalid base url {}", self.base_url)))?
            .pop_if_empty()
            .extend(["v8", "finance", "chart", symbol]);
        url.query_pairs_mut()
            .append_pair("period1", &period1.to_string())
            .append_pair("period2", &period2.to_string())
            .append_pair("interval", "1d")
            .append_pair("events", "div,splits")
            .append_pair("includeAdjustedClose", "true");
        Ok(url)
    }

    pub async fn fetch_chart(
        &self,
        symbol: &str,
        period1: i64,
        period2: i64,
    ) -> Result<ChartResponse, MarketDataError> {
        let url = self.chart_url(symbol, period1, period2)?;
        debug!(symbol = %symbol, url = %url, "Requesting Yahoo chart");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(MarketDataError::NotFound(symbol.to_string()));
        }
        if !status.is_success() {
            return Err(MarketDataError::Request(format!(
                "Yahoo returned {} for {}",
                status, symbol
            )));
        }

        Ok(response.json::<ChartResponse>().await?)
    }
}
