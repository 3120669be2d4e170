//! Per-indicator threshold classification

use crate::config::ThresholdPair;
use crate::models::{IndicatorReading, Leaning};

/// Thresholds keep at least one fractional digit (`1.0`, not `1`).
fn format_threshold(threshold: f64) -> String {
    format!("{:?}", threshold)
}

/// Classify an indicator value against its thresholds.
///
/// - `v > overbought` → `"<hi> < <v>"`, e.g. `0.8 < 0.934`
/// - `v < oversold` → `"<v> < <lo>"`
/// - otherwise → `"<lo> <= <v> <= <hi>"`
///
/// `v` is printed with three decimals.
pub fn classify(value: f64, thresholds: &ThresholdPair) -> IndicatorReading {
    let hi = format_threshold(thresholds.overbought);
    let lo = format_threshold(thresholds.oversold);

    let (leaning, description) = if value > thresholds.overbought {
        (Leaning::Overbought, format!("{} < {:.3}", hi, value))
    } else if value < thresholds.oversold {
        (Leaning::Oversold, format!("{:.3} < {}", value, lo))
    } else {
        (Leaning::Neutral, format!("{} <= {:.3} <= {}", lo, value, hi))
    };

    IndicatorReading {
        value,
        leaning,
        description,
    }
}
