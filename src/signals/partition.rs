//! Watchlist partitioning by overall signal state

use crate::models::WatchlistPartition;
use crate::signals::engine::SignalEngine;
use futures_util::future::join_all;
use tracing::{debug, warn};

/// Evaluate every symbol concurrently and group the overbought and oversold ones.
///
/// Groups keep input order. Symbols that are neither, or whose evaluation
/// fails, are left out; a failure never aborts the batch.
pub async fn partition(engine: &SignalEngine, symbols: &[String]) -> WatchlistPartition {
    let results = join_all(symbols.iter().map(|symbol| engine.get_report(symbol))).await;

    let states = symbols
        .iter()
        .zip(results)
        .filter_map(|(symbol, result)| match result {
            Ok(report) => {
                debug!(symbol = %report.symbol, state = %report.overall.as_str(), "Partitioned {}", report.symbol);
                Some((report.symbol, report.overall))
            }
            Err(e) => {
                warn!(symbol = %symbol, kind = e.kind(), error = %e, "Skipping {} in watchlist check", symbol);
                None
            }
        });

    WatchlistPartition::from_states(states)
}
