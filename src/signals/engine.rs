//! Signal evaluation engine: provider → indicators → classification → overall state.

use crate::config::SignalConfig;
use crate::indicators::{fast_stochastic_oscillator, percent_b, price_wma_ratio};
use crate::models::{PriceSeries, SignalState, SymbolReport};
use crate::services::market_data::MarketDataProvider;
use crate::signals::error::SignalError;
use crate::signals::thresholds::classify;
use std::sync::Arc;
use tracing::debug;

pub struct SignalEngine {
    provider: Arc<dyn MarketDataProvider>,
    config: SignalConfig,
}

impl SignalEngine {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self::with_config(provider, SignalConfig::default())
    }

    pub fn with_config(provider: Arc<dyn MarketDataProvider>, config: SignalConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &SignalConfig {
        &self.config
    }

    pub fn provider(&self) -> &Arc<dyn MarketDataProvider> {
        &self.provider
    }

    /// Fetch a fresh series for `symbol` and evaluate it. Nothing is cached.
    pub async fn get_report(&self, symbol: &str) -> Result<SymbolReport, SignalError> {
        let symbol = symbol.trim().to_uppercase();
        let series = self
            .provider
            .get_history(&symbol, self.config.lookback())
            .await?;

        debug!(symbol = %symbol, bars = series.len(), "Evaluating {} with {} bars", symbol, series.len());
        Self::evaluate(&symbol, &series, &self.config)
    }

    /// Evaluate a series without touching the provider.
    pub fn evaluate(
        symbol: &str,
        series: &PriceSeries,
        config: &SignalConfig,
    ) -> Result<SymbolReport, SignalError> {
        let last = series
            .last()
            .copied()
            .ok_or_else(|| SignalError::SymbolNotFound(symbol.to_string()))?;
        let closes = series.closes();

        let fso = fast_stochastic_oscillator(
            series.bars(),
            config.stochastic.window,
            config.stochastic.smoothing,
        )?;
        let pb = percent_b(&closes, config.bollinger.num_stds, config.bollinger.window)?;
        let pwma = price_wma_ratio(&closes, config.wma_window)?;

        let fso_reading = classify(fso, &config.thresholds.fast_stochastic);
        let pb_reading = classify(pb, &config.thresholds.percent_b);
        let pwma_reading = classify(pwma, &config.thresholds.price_wma_ratio);

        let overall = SignalState::from_leanings(&[
            fso_reading.leaning,
            pb_reading.leaning,
            pwma_reading.leaning,
        ]);

        Ok(SymbolReport {
            symbol: symbol.to_uppercase(),
            fast_stochastic: fso_reading,
            percent_b: pb_reading,
            price_wma_ratio: pwma_reading,
            overall,
            last_close: last.close,
            as_of_date: last.date,
        })
    }
}
