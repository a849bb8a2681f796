//! Domain service for calculator
//!
//! Contains the core business logic for arithmetic operations.

use calculator_sdk::{CalculatorError, Operand, Operation};
use tracing::debug;

/// Domain service that performs arithmetic operations.
///
/// This is a simple stateless service. Integer operations detect overflow
/// instead of wrapping, and division rejects a zero divisor before any
/// arithmetic happens.
#[derive(Debug, Clone, Default)]
pub struct Service;

// Stateless: methods keep `&self` so the service can sit behind `CalculatorClientV1`.
#[allow(clippy::unused_self)]
impl Service {
    /// Create a new service.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Add two numbers and return the sum.
    ///
    /// # Errors
    /// Returns [`CalculatorError::Overflow`] if the sum is out of range
    /// or non-finite from finite operands.
    pub fn add<T: Operand>(&self, a: T, b: T) -> Result<T, CalculatorError> {
        let sum = a.checked_add(b).ok_or(CalculatorError::Overflow {
            operation: Operation::Add,
        })?;
        debug!(%a, %b, "performing addition");
        Ok(sum)
    }

    /// Subtract `b` from `a` and return the difference.
    ///
    /// # Errors
    /// Returns [`CalculatorError::Overflow`] if the difference is out of range
    /// or non-finite from finite operands.
    pub fn subtract<T: Operand>(&self, a: T, b: T) -> Result<T, CalculatorError> {
        let difference = a.checked_sub(b).ok_or(CalculatorError::Overflow {
            operation: Operation::Subtract,
        })?;
        debug!(%a, %b, "performing subtraction");
        Ok(difference)
    }

    /// Multiply two numbers and return the product.
    ///
    /// # Errors
    /// Returns [`CalculatorError::Overflow`] if the product is out of range
    /// or non-finite from finite operands.
    pub fn multiply<T: Operand>(&self, a: T, b: T) -> Result<T, CalculatorError> {
        let product = a.checked_mul(b).ok_or(CalculatorError::Overflow {
            operation: Operation::Multiply,
        })?;
        debug!(%a, %b, "performing multiplication");
        Ok(product)
    }

    /// Divide `dividend` by `divisor` and return the quotient.
    ///
    /// Integer quotients truncate toward zero; float quotients follow IEEE-754.
    ///
    /// # Errors
    /// Returns [`CalculatorError::InvalidOperation`] with the message
    /// `"Division by zero is not possible"` when `divisor` is zero. Nothing is
    /// logged on that path. Returns [`CalculatorError::Overflow`] when an
    /// integer quotient is out of range (`i64::MIN / -1`) or a float quotient of
    /// finite operands is not finite.
    pub fn divide<T: Operand>(&self, dividend: T, divisor: T) -> Result<T, CalculatorError> {
        if divisor.is_zero() {
            return Err(CalculatorError::division_by_zero());
        }
        let quotient = dividend
            .checked_div(divisor)
            .ok_or(CalculatorError::Overflow {
                operation: Operation::Divide,
            })?;
        debug!(%dividend, %divisor, "performing division");
        Ok(quotient)
    }

    /// Apply `operation` to `a` and `b`.
    ///
    /// # Errors
    /// Propagates the error of the selected operation.
    pub fn evaluate<T: Operand>(
        &self,
        operation: Operation,
        a: T,
        b: T,
    ) -> Result<T, CalculatorError> {
        match operation {
            Operation::Add => self.add(a, b),
            Operation::Subtract => self.subtract(a, b),
            Operation::Multiply => self.multiply(a, b),
            Operation::Divide => self.divide(a, b),
        }
    }
}
