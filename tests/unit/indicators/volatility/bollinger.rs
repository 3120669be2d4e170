//! Unit tests for Bollinger Bands and %B

use crate::fixtures::linear_closes;
use stonks::indicators::volatility::calculate_bollinger_bands;
use stonks::indicators::{percent_b, IndicatorError};

#[test]
fn test_percent_b_insufficient_data() {
    let closes = linear_closes(20);
    assert!(matches!(
        percent_b(&closes, 2.0, 21),
        Err(IndicatorError::InsufficientData {
            required: 21,
            available: 20,
            ..
        })
    ));
}

#[test]
fn test_percent_b_flat_series_is_undefined() {
    let closes = vec![42.0; 30];
    assert_eq!(
        percent_b(&closes, 2.0, 21),
        Err(IndicatorError::Undefined {
            indicator: "percent b"
        })
    );
}

#[test]
fn test_percent_b_known_value() {
    let closes: Vec<f64> = (1..=21).map(|v| v as f64).collect();
    // sample variance of 1..=21 is 38.5
    let std = 38.5f64.sqrt();
    let lower = 11.0 - 2.0 * std;
    let expected = (21.0 - lower) / (4.0 * std);

    let value = percent_b(&closes, 2.0, 21).unwrap();
    assert!((value - expected).abs() < 1e-9);
}

#[test]
fn test_bands_are_symmetric_around_sma() {
    let closes = linear_closes(30);
    let bands = calculate_bollinger_bands(&closes, 21, 2.0).unwrap();
    assert!((bands.middle - 119.0).abs() < 1e-9);
    assert!(((bands.upper - bands.middle) - (bands.middle - bands.lower)).abs() < 1e-9);
    assert!(bands.width() > 0.0);
}
