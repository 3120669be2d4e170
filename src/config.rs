//! Runtime configuration.
//!
//! Deployment settings come from environment variables (optionally loaded from
//! `.env` by the binary). Indicator windows and thresholds live in
//! [`SignalConfig`], which is passed explicitly into the signal engine.

use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379/";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_YAHOO_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Deployment environment (`APP_ENV`), defaults to `sandbox`.
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

pub fn get_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

pub fn get_redis_url() -> String {
    env::var("REDIS_URL").unwrap_or_else(|_| DEFAULT_REDIS_URL.to_string())
}

/// Bot token; `None` disables outbound Telegram messages.
pub fn get_telegram_token() -> Option<String> {
    env::var("TELEGRAM_API_TOKEN").ok().filter(|t| !t.is_empty())
}

pub fn get_telegram_api_url() -> String {
    env::var("TELEGRAM_API_URL").unwrap_or_else(|_| DEFAULT_TELEGRAM_API_URL.to_string())
}

pub fn get_yahoo_base_url() -> String {
    env::var("YAHOO_BASE_URL").unwrap_or_else(|_| DEFAULT_YAHOO_BASE_URL.to_string())
}

/// Overbought/oversold cut-offs for a single indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdPair {
    pub overbought: f64,
    pub oversold: f64,
}

impl ThresholdPair {
    pub const fn new(overbought: f64, oversold: f64) -> Self {
        Self {
            overbought,
            oversold,
        }
    }
}

/// Threshold table, one pair per indicator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdTable {
    pub fast_stochastic: ThresholdPair,
    pub percent_b: ThresholdPair,
    pub price_wma_ratio: ThresholdPair,
}

impl ThresholdTable {
    pub const FAST_STOCHASTIC: ThresholdPair = ThresholdPair::new(0.8, 0.2);
    pub const PERCENT_B: ThresholdPair = ThresholdPair::new(1.0, 0.0);
    pub const PRICE_WMA_RATIO: ThresholdPair = ThresholdPair::new(1.05, 0.95);
}

impl Default for ThresholdTable {
    fn default() -> Self {
        Self {
            fast_stochastic: Self::FAST_STOCHASTIC,
            percent_b: Self::PERCENT_B,
            price_wma_ratio: Self::PRICE_WMA_RATIO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StochasticParams {
    pub window: usize,
    pub smoothing: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerParams {
    pub window: usize,
    pub num_stds: f64,
}

/// Windows, thresholds and history length used by the signal engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalConfig {
    pub stochastic: StochasticParams,
    pub bollinger: BollingerParams,
    pub wma_window: usize,
    pub thresholds: ThresholdTable,
    /// Calendar days of history requested from the provider.
    pub lookback_days: i64,
}

impl SignalConfig {
    /// Longest number of bars any indicator needs.
    pub fn min_bars(&self) -> usize {
        let stochastic = self.stochastic.window + self.stochastic.smoothing.saturating_sub(1);
        stochastic.max(self.bollinger.window).max(self.wma_window)
    }

    pub fn lookback(&self) -> chrono::Duration {
        chrono::Duration::days(self.lookback_days)
    }
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            stochastic: StochasticParams {
                window: 18,
                smoothing: 3,
            },
            bollinger: BollingerParams {
                window: 21,
                num_stds: 2.0,
            },
            wma_window: 22,
            thresholds: ThresholdTable::default(),
            // roughly two months of trading days
            lookback_days: 62,
        }
    }
}
