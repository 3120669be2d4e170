//! Technical signal engine: threshold classification, unanimity rule,
//! report rendering and watchlist partitioning.

pub mod engine;
pub mod error;
pub mod partition;
pub mod render;
pub mod thresholds;

pub use engine::SignalEngine;
pub use error::SignalError;
pub use partition::partition;
pub use render::{render_partition, render_report};
pub use thresholds::classify;
