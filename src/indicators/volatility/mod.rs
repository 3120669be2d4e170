//! Volatility indicators: Bollinger Bands, %B

pub mod bollinger;

pub use bollinger::*;
