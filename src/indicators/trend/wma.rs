//! Price / WMA ratio indicator

use crate::common::math;
use crate::indicators::error::{finite_or_undefined, IndicatorError};

pub const NAME: &str = "price/wma ratio";

/// Weighted moving average of the last `window` closes (newest weighted `window`).
pub fn calculate_wma(closes: &[f64], window: usize) -> Result<f64, IndicatorError> {
    math::wma(closes, window).ok_or_else(|| IndicatorError::insufficient(NAME, window.max(1), closes.len()))
}

/// Ratio of the last close to its weighted moving average. Above 1 means price is above trend.
pub fn price_wma_ratio(closes: &[f64], window: usize) -> Result<f64, IndicatorError> {
    let wma = calculate_wma(closes, window)?;
    if wma == 0.0 {
        return Err(IndicatorError::undefined(NAME));
    }

    let close = closes[closes.len() - 1];
    finite_or_undefined(close / wma, NAME)
}
