// ============================================================================
// Scalar
// Plain decimal multipliers/divisors carrying their own precision
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::parser::scale_by_natural_precision;
use num_bigint::BigInt;
use num_traits::Zero;
use std::fmt;
use std::str::FromStr;

/// A unitless decimal factor: `magnitude / 10^precision`.
///
/// Unlike a [`DecimalValue`](super::DecimalValue), its scale comes from its
/// own textual form rather than from currency metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scalar {
    pub magnitude: BigInt,
    pub precision: u32,
}

impl Scalar {
    #[inline]
    pub fn new(magnitude: impl Into<BigInt>, precision: u32) -> Self {
        Self {
            magnitude: magnitude.into(),
            precision,
        }
    }

    /// An integer factor (precision 0).
    #[inline]
    pub fn integer(value: impl Into<BigInt>) -> Self {
        Self::new(value, 0)
    }

    /// Parse a decimal string, keeping every fraction digit.
    pub fn parse(text: &str) -> NumericResult<Self> {
        let (magnitude, precision) = scale_by_natural_precision(text)?;
        Ok(Self {
            magnitude,
            precision,
        })
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }
}

impl FromStr for Scalar {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scalar::parse(s)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.precision == 0 {
            return write!(f, "{}", self.magnitude);
        }

        let digits = self.magnitude.magnitude().to_string();
        let width = self.precision as usize;
        let padded = format!("{:0>width$}", digits, width = width + 1);
        let (whole, frac) = padded.split_at(padded.len() - width);
        let sign = if self.magnitude < BigInt::zero() { "-" } else { "" };
        write!(f, "{}{}.{}", sign, whole, frac)
    }
}
