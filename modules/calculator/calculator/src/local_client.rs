//! Local client implementing the `CalculatorClientV1` trait.

use std::sync::Arc;

use calculator_sdk::{CalculatorClientV1, CalculatorError, Operation};

use crate::domain::Service;

/// In-process calculator client.
///
/// Delegates every call to the domain service.
#[derive(Clone, Default)]
pub struct LocalClient {
    service: Arc<Service>,
}

impl LocalClient {
    /// Creates a new local client with the given service.
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

impl CalculatorClientV1 for LocalClient {
    fn add(&self, a: i64, b: i64) -> Result<i64, CalculatorError> {
        self.service.add(a, b)
    }

    fn subtract(&self, a: i64, b: i64) -> Result<i64, CalculatorError> {
        self.service.subtract(a, b)
    }

    fn multiply(&self, a: i64, b: i64) -> Result<i64, CalculatorError> {
        self.service.multiply(a, b)
    }

    fn divide(&self, dividend: i64, divisor: i64) -> Result<i64, CalculatorError> {
        self.service.divide(dividend, divisor)
    }

    fn divide_f64(&self, dividend: f64, divisor: f64) -> Result<f64, CalculatorError> {
        self.service.divide(dividend, divisor)
    }

    fn evaluate(&self, operation: Operation, a: i64, b: i64) -> Result<i64, CalculatorError> {
        self.service.evaluate(operation, a, b)
    }

    fn evaluate_f64(&self, operation: Operation, a: f64, b: f64) -> Result<f64, CalculatorError> {
        self.service.evaluate(operation, a, b)
    }
}
