use crate::indicators::IndicatorError;
use crate::services::market_data::MarketDataError;
use thiserror::Error;

/// Why a single symbol could not be evaluated.
#[derive(Debug, Error)]
pub enum SignalError {
    #[error("'{0}' not found")]
    SymbolNotFound(String),

    #[error("not enough data: {indicator} needs {required} bars, got {available}")]
    InsufficientData {
        indicator: &'static str,
        required: usize,
        available: usize,
    },

    #[error("{indicator} is undefined for this window")]
    UndefinedIndicator { indicator: &'static str },

    #[error(transparent)]
    Provider(MarketDataError),
}

impl SignalError {
    /// Label used for the `signal_reports_total` metric and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SignalError::SymbolNotFound(_) => "not_found",
            SignalError::InsufficientData { .. } => "insufficient_data",
            SignalError::UndefinedIndicator { .. } => "undefined_indicator",
            SignalError::Provider(_) => "provider_error",
        }
    }
}

impl From<IndicatorError> for SignalError {
    fn from(e: IndicatorError) -> Self {
        match e {
            IndicatorError::InsufficientData {
                indicator,
                required,
                available,
            } => SignalError::InsufficientData {
                indicator,
                required,
                available,
            },
            IndicatorError::Undefined { indicator } => SignalError::UndefinedIndicator { indicator },
        }
    }
}

impl From<MarketDataError> for SignalError {
    fn from(e: MarketDataError) -> Self {
        match e {
            MarketDataError::NotFound(symbol) => SignalError::SymbolNotFound(symbol),
            other => SignalError::Provider(other),
        }
    }
}
