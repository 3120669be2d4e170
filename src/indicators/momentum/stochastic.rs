//! Fast stochastic oscillator

use crate::common::math;
use crate::indicators::error::{finite_or_undefined, IndicatorError};
use crate::models::PriceBar;

pub const NAME: &str = "fast stochastic oscillator";

/// Calculate the fast stochastic oscillator (%D) at the last bar
///
/// %K = (close - lowest low) / (highest high - lowest low) over `window` bars
/// %D = SMA(%K, smoothing)
///
/// A zero high-low range anywhere in the last `smoothing` %K values makes the
/// result undefined.
pub fn fast_stochastic_oscillator(
    bars: &[PriceBar],
    window: usize,
    smoothing: usize,
) -> Result<f64, IndicatorError> {
    let required = window + smoothing.saturating_sub(1);
    if window == 0 || smoothing == 0 || bars.len() < required {
        return Err(IndicatorError::insufficient(NAME, required.max(1), bars.len()));
    }

    let highs: Vec<f64> = bars.iter().map(|b| b.high).collect();
    let lows: Vec<f64> = bars.iter().map(|b| b.low).collect();

    let mut k_values = Vec::with_capacity(smoothing);
    for end in (bars.len() - smoothing + 1)..=bars.len() {
        let k = percent_k(bars[end - 1].close, &highs[..end], &lows[..end], window)
            .ok_or_else(|| IndicatorError::insufficient(NAME, required, bars.len()))?;
        k_values.push(k);
    }

    let d = math::sma(&k_values, smoothing)
        .ok_or_else(|| IndicatorError::insufficient(NAME, required, bars.len()))?;
    finite_or_undefined(d, NAME)
}

/// %K for the window ending at the last element of `highs`/`lows`. NaN on a zero range.
fn percent_k(close: f64, highs: &[f64], lows: &[f64], window: usize) -> Option<f64> {
    let highest_high = math::highest(highs, window)?;
    let lowest_low = math::lowest(lows, window)?;
    let range = highest_high - lowest_low;
    if range == 0.0 {
        return Some(f64::NAN);
    }
    Some((close - lowest_low) / range)
}
