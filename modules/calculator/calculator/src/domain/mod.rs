//! Domain layer for calculator module
//!
//! Contains business logic for arithmetic operations.

pub mod service;

pub use service::Service;
