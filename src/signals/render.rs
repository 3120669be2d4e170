//! Chat-ready text for reports and partitions.

use crate::models::{SymbolReport, WatchlistPartition};

/// Fixed layout: header with symbol and overall state, last close, date, then one line per indicator.
pub fn render_report(report: &SymbolReport) -> String {
    format!(
        "{} is {}\n\
         Last close: {:.2}\n\
         As of: {}\n\
         \n\
         Fast stochastic oscillator: {}\n\
         Percent B: {}\n\
         Price/WMA ratio: {}",
        report.symbol.to_uppercase(),
        report.overall,
        report.last_close,
        report.as_of_date.format("%Y-%m-%d"),
        report.fast_stochastic.description,
        report.percent_b.description,
        report.price_wma_ratio.description,
    )
}

pub fn render_partition(partition: &WatchlistPartition) -> String {
    if partition.is_empty() {
        return "None of your watched tickers are overbought or oversold.".to_string();
    }

    let group = |symbols: &[String]| {
        if symbols.is_empty() {
            "-".to_string()
        } else {
            symbols.join("\n")
        }
    };

    format!(
        "Overbought:\n{}\n\nOversold:\n{}",
        group(&partition.overbought),
        group(&partition.oversold)
    )
}
