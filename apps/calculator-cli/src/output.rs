//! Rendering of calculation results and errors.

use anyhow::Context;
use calculator_sdk::{CalculatorError, Operand, Operation};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(Serialize)]
struct CalculationOutput<T> {
    operation: Operation,
    a: T,
    b: T,
    result: T,
}

#[derive(Serialize)]
struct ErrorOutput<'a> {
    error: ErrorBody<'a>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    code: &'a str,
    message: String,
}

/// Render a successful calculation, e.g. `10 / 2 = 5`.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn render_success<T: Operand>(
    format: OutputFormat,
    operation: Operation,
    a: T,
    b: T,
    result: T,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Human => Ok(format!("{a} {} {b} = {result}", operation.symbol())),
        OutputFormat::Json => serde_json::to_string(&CalculationOutput {
            operation,
            a,
            b,
            result,
        })
        .context("failed to serialize result"),
    }
}

/// Render a calculator error. Human output is meant for stderr, JSON for stdout.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn render_error(format: OutputFormat, err: &CalculatorError) -> anyhow::Result<String> {
    match format {
        OutputFormat::Human => Ok(format!("error: {err}")),
        OutputFormat::Json => serde_json::to_string(&ErrorOutput {
            error: ErrorBody {
                code: err.code(),
                message: err.to_string(),
            },
        })
        .context("failed to serialize error"),
    }
}
