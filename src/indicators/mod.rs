//! Indicator library: pure functions over daily price bars.
//!
//! Every indicator evaluates its trailing window at the last bar only; there is
//! no look-ahead.

pub mod error;

pub mod momentum;
pub mod trend;
pub mod volatility;

pub use error::IndicatorError;
pub use momentum::fast_stochastic_oscillator;
pub use trend::price_wma_ratio;
pub use volatility::percent_b;
