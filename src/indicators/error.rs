use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    #[error("{indicator} needs at least {required} bars, got {available}")]
    InsufficientData {
        indicator: &'static str,
        required: usize,
        available: usize,
    },

    #[error("{indicator} is undefined for this window")]
    Undefined { indicator: &'static str },
}

impl IndicatorError {
    pub(crate) fn insufficient(indicator: &'static str, required: usize, available: usize) -> Self {
        IndicatorError::InsufficientData {
            indicator,
            required,
            available,
        }
    }

    pub(crate) fn undefined(indicator: &'static str) -> Self {
        IndicatorError::Undefined { indicator }
    }
}

/// Non-finite results (zero ranges, NaN inputs) become `Undefined`.
pub(crate) fn finite_or_undefined(value: f64, indicator: &'static str) -> Result<f64, IndicatorError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(IndicatorError::undefined(indicator))
    }
}
