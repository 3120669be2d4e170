use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Which side of its thresholds a single indicator sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Leaning {
    Overbought,
    Oversold,
    Neutral,
}

/// Overall state of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalState {
    Overbought,
    Oversold,
    Neither,
}

impl SignalState {
    /// Unanimity rule: every indicator has to lean the same way, anything else is `Neither`.
    pub fn from_leanings(leanings: &[Leaning]) -> Self {
        if leanings.is_empty() {
            return SignalState::Neither;
        }
        if leanings.iter().all(|l| *l == Leaning::Overbought) {
            SignalState::Overbought
        } else if leanings.iter().all(|l| *l == Leaning::Oversold) {
            SignalState::Oversold
        } else {
            SignalState::Neither
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SignalState::Overbought => "overbought",
            SignalState::Oversold => "oversold",
            SignalState::Neither => "neither",
        }
    }
}

impl fmt::Display for SignalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalState::Neither => f.write_str("neither overbought nor oversold"),
            other => f.write_str(other.as_str()),
        }
    }
}

/// A classified indicator value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorReading {
    pub value: f64,
    pub leaning: Leaning,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymbolReport {
    pub symbol: String,
    pub fast_stochastic: IndicatorReading,
    pub percent_b: IndicatorReading,
    pub price_wma_ratio: IndicatorReading,
    pub overall: SignalState,
    pub last_close: f64,
    pub as_of_date: NaiveDate,
}

impl SymbolReport {
    pub fn readings(&self) -> [&IndicatorReading; 3] {
        [&self.fast_stochastic, &self.percent_b, &self.price_wma_ratio]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WatchlistPartition {
    pub overbought: Vec<String>,
    pub oversold: Vec<String>,
}

impl WatchlistPartition {
    /// Stable partition: groups keep the order the states arrive in.
    pub fn from_states<I>(states: I) -> Self
    where
        I: IntoIterator<Item = (String, SignalState)>,
    {
        let mut partition = Self::default();
        for (symbol, state) in states {
            match state {
                SignalState::Overbought => partition.overbought.push(symbol),
                SignalState::Oversold => partition.oversold.push(symbol),
                SignalState::Neither => {}
            }
        }
        partition
    }

    pub fn is_empty(&self) -> bool {
        self.overbought.is_empty() && self.oversold.is_empty()
    }
}
