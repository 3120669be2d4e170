use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: NaiveDate,
    pub close: f64,
    pub high: f64,
    pub low: f64,
}

impl PriceBar {
    pub fn new(date: NaiveDate, close: f64, high: f64, low: f64) -> Self {
        Self {
            date,
            close,
            high,
            low,
        }
    }
}

/// Daily bars ordered by date ascending.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Wraps bars as given; callers are expected to pass them in date order.
    pub fn new(bars: Vec<PriceBar>) -> Self {
        Self { bars }
    }

    /// Sorts by date before wrapping.
    pub fn from_unsorted(mut bars: Vec<PriceBar>) -> Self {
        bars.sort_by_key(|b| b.date);
        Self { bars }
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn last(&self) -> Option<&PriceBar> {
        self.bars.last()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }
}

impl From<Vec<PriceBar>> for PriceSeries {
    fn from(bars: Vec<PriceBar>) -> Self {
        Self::new(bars)
    }
}
