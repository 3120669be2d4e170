//! External data services.

pub mod market_data;
pub mod yahoo;

pub use market_data::{InMemoryMarketDataProvider, MarketDataError, MarketDataProvider};
pub use yahoo::{YahooMarketDataProvider, YahooRestClient};
