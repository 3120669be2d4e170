//! Trend indicators: price / weighted moving average ratio

pub mod wma;

pub use wma::*;
