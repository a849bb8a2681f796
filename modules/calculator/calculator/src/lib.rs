//! Calculator Module
//!
//! A stateless service performing checked binary arithmetic.
//!
//! ## Architecture
//!
//! - `domain/service.rs` - Core business logic
//! - `local_client.rs` - `CalculatorClientV1` implementation over the service
//!
//! The public API is defined in `calculator-sdk` and re-exported here.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub use calculator_sdk::{
    CalculatorClientV1, CalculatorError, DIVISION_BY_ZERO_MESSAGE, Operand, Operation,
};

pub mod local_client;
pub use local_client::LocalClient;

// === INTERNAL MODULES ===
pub mod domain;
pub use domain::Service;
