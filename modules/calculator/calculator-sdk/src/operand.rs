//! Numeric operand abstraction.
//!
//! `i64` follows Rust integer semantics with explicit overflow detection.
//! `f64` follows IEEE-754, except that finite operands producing a
//! non-finite result count as overflow. A zero divisor is rejected by the
//! service before any of these run.

use std::fmt;
use std::num::FpCategory;
use std::str::FromStr;

use serde::Serialize;

/// A value that can be supplied as either side of a binary operation.
pub trait Operand:
    Copy
    + PartialEq
    + fmt::Debug
    + fmt::Display
    + FromStr
    + Serialize
    + Send
    + Sync
    + 'static
{
    /// `true` for integer `0` and for both signed float zeros. `false` for NaN.
    fn is_zero(&self) -> bool;

    /// `false` only for NaN and the infinities.
    fn is_finite(&self) -> bool;

    fn checked_add(self, rhs: Self) -> Option<Self>;
    fn checked_sub(self, rhs: Self) -> Option<Self>;
    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// `None` when the quotient is not representable. Callers reject zero
    /// divisors before reaching this.
    fn checked_div(self, rhs: Self) -> Option<Self>;
}

impl Operand for i64 {
    fn is_zero(&self) -> bool {
        *self == 0
    }

    fn is_finite(&self) -> bool {
        true
    }

    fn checked_add(self, rhs: Self) -> Option<Self> {
        i64::checked_add(self, rhs)
    }

    fn checked_sub(self, rhs: Self) -> Option<Self> {
        i64::checked_sub(self, rhs)
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        i64::checked_mul(self, rhs)
    }

    fn checked_div(self, rhs: Self) -> Option<Self> {
        i64::checked_div(self, rhs)
    }
}

impl Operand for f64 {
    fn is_zero(&self) -> bool {
        self.classify() == FpCategory::Zero
    }

    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }

    fn checked_add(self, rhs: Self) -> Option<Self> {
        finite_or_overflow(self, rhs, self + rhs)
    }

    fn checked_sub(self, rhs: Self) -> Option<Self> {
        finite_or_overflow(self, rhs, self - rhs)
    }

    fn checked_mul(self, rhs: Self) -> Option<Self> {
        finite_or_overflow(self, rhs, self * rhs)
    }

    fn checked_div(self, rhs: Self) -> Option<Self> {
        finite_or_overflow(self, rhs, self / rhs)
    }
}

/// Non-finite operands propagate as IEEE values; a non-finite result from
/// finite operands is an overflow.
fn finite_or_overflow(lhs: f64, rhs: f64, result: f64) -> Option<f64> {
    if lhs.is_finite() && rhs.is_finite() && !result.is_finite() {
        None
    } else {
        Some(result)
    }
}
