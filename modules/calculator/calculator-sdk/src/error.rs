//! Error type for calculator operations

use crate::models::Operation;

/// Message carried by the error returned for a zero divisor.
pub const DIVISION_BY_ZERO_MESSAGE: &str = "Division by zero is not possible";

/// Error type for Calculator operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// The operation has no mathematically defined result.
    #[error("{message}")]
    InvalidOperation { message: String },

    /// The result is outside the representable range: out of `i64` range,
    /// or non-finite from finite `f64` operands.
    #[error("arithmetic overflow in {operation}")]
    Overflow { operation: Operation },
}

impl CalculatorError {
    /// Error for a division whose divisor is zero.
    #[must_use]
    pub fn division_by_zero() -> Self {
        Self::InvalidOperation {
            message: DIVISION_BY_ZERO_MESSAGE.to_owned(),
        }
    }

    /// Stable machine-readable code for this error kind.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidOperation { .. } => "invalid_operation",
            Self::Overflow { .. } => "overflow",
        }
    }
}
