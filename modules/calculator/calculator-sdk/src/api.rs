//! Calculator API trait
//!
//! Contract trait for the calculator service.

use crate::error::CalculatorError;
use crate::models::Operation;

/// Calculator API trait
///
/// Binary arithmetic over two operands. Every method either returns the
/// numeric result or an error, never both.
pub trait CalculatorClientV1: Send + Sync {
    /// Add two integers.
    ///
    /// # Errors
    /// Returns [`CalculatorError::Overflow`] if the sum does not fit in `i64`.
    fn add(&self, a: i64, b: i64) -> Result<i64, CalculatorError>;

    /// Subtract `b` from `a`.
    ///
    /// # Errors
    /// Returns [`CalculatorError::Overflow`] if the difference does not fit in `i64`.
    fn subtract(&self, a: i64, b: i64) -> Result<i64, CalculatorError>;

    /// Multiply two integers.
    ///
    /// # Errors
    /// Returns [`CalculatorError::Overflow`] if the product does not fit in `i64`.
    fn multiply(&self, a: i64, b: i64) -> Result<i64, CalculatorError>;

    /// Divide `dividend` by `divisor`, truncating toward zero.
    ///
    /// # Errors
    /// Returns [`CalculatorError::InvalidOperation`] when `divisor` is zero and
    /// [`CalculatorError::Overflow`] for `i64::MIN / -1`.
    fn divide(&self, dividend: i64, divisor: i64) -> Result<i64, CalculatorError>;

    /// Divide two floating-point values.
    ///
    /// # Errors
    /// Returns [`CalculatorError::InvalidOperation`] when `divisor` is `0.0` or `-0.0`
    /// and [`CalculatorError::Overflow`] when finite operands give a non-finite quotient.
    fn divide_f64(&self, dividend: f64, divisor: f64) -> Result<f64, CalculatorError>;

    /// Apply `operation` to two integers.
    ///
    /// # Errors
    /// Same as the method `operation` dispatches to.
    fn evaluate(&self, operation: Operation, a: i64, b: i64) -> Result<i64, CalculatorError>;

    /// Apply `operation` to two floating-point values.
    ///
    /// # Errors
    /// Returns [`CalculatorError::InvalidOperation`] for a zero divisor and
    /// [`CalculatorError::Overflow`] when finite operands give a non-finite result.
    fn evaluate_f64(&self, operation: Operation, a: f64, b: f64) -> Result<f64, CalculatorError>;
}
