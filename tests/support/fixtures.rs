//! Price series builders shared by unit and integration tests

#![allow(dead_code)]

use chrono::{Days, NaiveDate};
use stonks::models::{PriceBar, PriceSeries};

pub fn date(day: usize) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Days::new(day as u64)
}

/// One bar per close, high/low one unit away from the close.
pub fn series_from_closes(closes: &[f64]) -> PriceSeries {
    let bars = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PriceBar::new(date(i), close, close + 1.0, close - 1.0))
        .collect();
    PriceSeries::new(bars)
}

pub fn flat_series(count: usize, price: f64) -> PriceSeries {
    series_from_closes(&vec![price; count])
}

/// 40 quiet days at 100 followed by a three-day rally to 130.
pub fn overbought_series() -> PriceSeries {
    spike_series(&[110.0, 120.0, 130.0])
}

/// 40 quiet days at 100 followed by a three-day selloff to 70.
pub fn oversold_series() -> PriceSeries {
    spike_series(&[90.0, 80.0, 70.0])
}

fn spike_series(tail: &[f64]) -> PriceSeries {
    let mut bars: Vec<PriceBar> = (0..40)
        .map(|i| PriceBar::new(date(i), 100.0, 101.0, 99.0))
        .collect();
    for (offset, &close) in tail.iter().enumerate() {
        bars.push(PriceBar::new(date(40 + offset), close, close + 0.5, close - 0.5));
    }
    PriceSeries::new(bars)
}

/// Closes alternating between 100 and 101: every indicator stays mid-range.
pub fn sideways_series() -> PriceSeries {
    let closes: Vec<f64> = (0..43)
        .map(|i| if i % 2 == 0 { 100.0 } else { 101.0 })
        .collect();
    series_from_closes(&closes)
}

/// Straight line from 100 upwards, one unit per day.
pub fn linear_closes(count: usize) -> Vec<f64> {
    (0..count).map(|i| 100.0 + i as f64).collect()
}
