//! Bollinger Bands and %B

use crate::common::math;
use crate::indicators::error::{finite_or_undefined, IndicatorError};

pub const NAME: &str = "percent b";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BollingerBands {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

impl BollingerBands {
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Calculate Bollinger Bands at the last close
///
/// Middle Band = SMA(window)
/// Upper Band = Middle + (num_stds * sample standard deviation)
/// Lower Band = Middle - (num_stds * sample standard deviation)
pub fn calculate_bollinger_bands(
    closes: &[f64],
    window: usize,
    num_stds: f64,
) -> Result<BollingerBands, IndicatorError> {
    if window < 2 || closes.len() < window {
        return Err(IndicatorError::insufficient(NAME, window.max(2), closes.len()));
    }

    let middle = math::sma(closes, window)
        .ok_or_else(|| IndicatorError::insufficient(NAME, window, closes.len()))?;
    let std = math::sample_std_dev(closes, window)
        .ok_or_else(|| IndicatorError::insufficient(NAME, window, closes.len()))?;

    Ok(BollingerBands {
        upper: middle + num_stds * std,
        middle,
        lower: middle - num_stds * std,
    })
}

/// Position of the last close inside its Bollinger Bands: 0 = lower band, 1 = upper band.
pub fn percent_b(closes: &[f64], num_stds: f64, window: usize) -> Result<f64, IndicatorError> {
    let bands = calculate_bollinger_bands(closes, window, num_stds)?;
    let width = bands.width();
    if width == 0.0 {
        return Err(IndicatorError::undefined(NAME));
    }

    let close = closes[closes.len() - 1];
    finite_or_undefined((close - bands.lower) / width, NAME)
}
