//! Trailing-window statistics.
//!
//! Every function looks at the last `period` values of the slice and returns
//! `None` when the slice is shorter than that or `period` is zero.

/// The trailing `period` values.
pub fn trailing(values: &[f64], period: usize) -> Option<&[f64]> {
    if period == 0 || values.len() < period {
        return None;
    }
    Some(&values[values.len() - period..])
}

/// Simple moving average of the last `period` values.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    let window = trailing(values, period)?;
    Some(shifted_mean(window))
}

// Accumulates offsets from the first value so a flat window averages to
// exactly that value.
fn shifted_mean(window: &[f64]) -> f64 {
    let base = window[0];
    base + window.iter().map(|v| v - base).sum::<f64>() / window.len() as f64
}

/// Sample standard deviation (divisor `period - 1`) of the last `period` values.
pub fn sample_std_dev(values: &[f64], period: usize) -> Option<f64> {
    if period < 2 {
        return None;
    }
    let window = trailing(values, period)?;
    let mean = shifted_mean(window);
    let sum_sq: f64 = window.iter().map(|v| (v - mean).powi(2)).sum();
    Some((sum_sq / (period - 1) as f64).sqrt())
}

/// Linearly weighted moving average: oldest value weight 1, newest weight `period`.
pub fn wma(values: &[f64], period: usize) -> Option<f64> {
    let window = trailing(values, period)?;
    let base = window[0];
    let total_weight = (period * (period + 1) / 2) as f64;
    let weighted: f64 = window
        .iter()
        .enumerate()
        .map(|(i, v)| (i + 1) as f64 * (v - base))
        .sum();
    Some(base + weighted / total_weight)
}

/// Maximum of the last `period` values. NaN propagates.
pub fn highest(values: &[f64], period: usize) -> Option<f64> {
    let window = trailing(values, period)?;
    Some(window.iter().copied().fold(f64::NEG_INFINITY, nan_max))
}

/// Minimum of the last `period` values. NaN propagates.
pub fn lowest(values: &[f64], period: usize) -> Option<f64> {
    let window = trailing(values, period)?;
    Some(window.iter().copied().fold(f64::INFINITY, nan_min))
}

fn nan_max(acc: f64, v: f64) -> f64 {
    if acc.is_nan() || v.is_nan() {
        f64::NAN
    } else {
        acc.max(v)
    }
}

fn nan_min(acc: f64, v: f64) -> f64 {
    if acc.is_nan() || v.is_nan() {
        f64::NAN
    } else {
        acc.min(v)
    }
}
