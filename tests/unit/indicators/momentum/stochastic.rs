//! Unit tests for the fast stochastic oscillator

use crate::fixtures::{date, flat_series, linear_closes, series_from_closes};
use stonks::indicators::{fast_stochastic_oscillator, IndicatorError};
use stonks::models::PriceBar;

#[test]
fn test_fso_insufficient_data_below_window_plus_smoothing() {
    let series = series_from_closes(&linear_closes(19));
    let result = fast_stochastic_oscillator(series.bars(), 18, 3);
    assert_eq!(
        result,
        Err(IndicatorError::InsufficientData {
            indicator: "fast stochastic oscillator",
            required: 20,
            available: 19,
        })
    );
}

#[test]
fn test_fso_defined_at_exactly_twenty_bars() {
    let series = series_from_closes(&linear_closes(20));
    let value = fast_stochastic_oscillator(series.bars(), 18, 3).unwrap();
    assert!(value.is_finite());
}

#[test]
fn test_fso_known_value_on_linear_trend() {
    // every window: high = close + 1, lowest low = close - 17 - 1
    let series = series_from_closes(&linear_closes(30));
    let value = fast_stochastic_oscillator(series.bars(), 18, 3).unwrap();
    assert!((value - 18.0 / 19.0).abs() < 1e-12);
}

#[test]
fn test_fso_flat_range_is_mid() {
    let series = flat_series(25, 50.0);
    let value = fast_stochastic_oscillator(series.bars(), 18, 3).unwrap();
    assert!((value - 0.5).abs() < 1e-12);
}

#[test]
fn test_fso_zero_range_is_undefined() {
    let bars: Vec<PriceBar> = (0..25).map(|i| PriceBar::new(date(i), 10.0, 10.0, 10.0)).collect();
    let result = fast_stochastic_oscillator(&bars, 18, 3);
    assert_eq!(
        result,
        Err(IndicatorError::Undefined {
            indicator: "fast stochastic oscillator"
        })
    );
}

#[test]
fn test_fso_zero_range_outside_smoothing_window_is_ignored() {
    // first bars have high == low, but the last 18+3-1 bars have a real range
    let mut bars: Vec<PriceBar> = (0..5).map(|i| PriceBar::new(date(i), 10.0, 10.0, 10.0)).collect();
    bars.extend((5..30).map(|i| PriceBar::new(date(i), 10.0, 11.0, 9.0)));
    assert!(fast_stochastic_oscillator(&bars, 18, 3).is_ok());
}
