//! Shared data models spanning the engine layers.

pub mod price;
pub mod report;

pub use price::{PriceBar, PriceSeries};
pub use report::{IndicatorReading, Leaning, SignalState, SymbolReport, WatchlistPartition};
