//! Error types for herd metrics calculations

use thiserror::Error;

/// Errors that can occur during metrics calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricsError {
    /// Feed intake of zero leaves efficiency undefined
    #[error("Cannot calculate efficiency: feed intake is zero")]
    DivisionByZero,

    /// A value fell outside the range its type accepts
    #[error("Invalid {kind} value: {value}")]
    InvalidValue { kind: &'static str, value: f64 },

    #[error("Demo window of {days} days exceeds the {max}-day limit")]
    WindowTooLong { days: u32, max: u32 },
}

impl MetricsError {
    pub fn invalid(kind: &'static str, value: f64) -> Self {
        Self::InvalidValue { kind, value }
    }
}
