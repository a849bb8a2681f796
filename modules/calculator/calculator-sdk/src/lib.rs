//! Calculator SDK
//!
//! This crate provides everything needed to consume the calculator:
//! - API trait (`CalculatorClientV1`)
//! - Operand abstraction (`Operand`) over integer and floating-point values
//! - Operation identifiers (`Operation`)
//! - Error types (`CalculatorError`)
//!
//! ## Usage
//!
//! ```ignore
//! use calculator_sdk::{CalculatorClientV1, CalculatorError};
//!
//! let client: &dyn CalculatorClientV1 = &calculator::LocalClient::default();
//! assert_eq!(client.divide(10, 2)?, 5);
//! assert!(matches!(
//!     client.divide(10, 0),
//!     Err(CalculatorError::InvalidOperation { .. })
//! ));
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAIT AND TYPES ===
mod api;
pub use api::CalculatorClientV1;

mod error;
pub use error::{CalculatorError, DIVISION_BY_ZERO_MESSAGE};

pub mod models;
pub use models::{Operation, ParseOperationError};

mod operand;
pub use operand::Operand;
