// ============================================================================
// Rounding Modes
// Integer division policies for scalar division
// ============================================================================

use super::errors::{NumericError, NumericResult};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How an inexact integer quotient is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Toward zero
    #[default]
    Truncate,
    /// Toward negative infinity
    Floor,
    /// Toward positive infinity
    Ceiling,
}

impl RoundingMode {
    /// Every mode, in declaration order.
    pub const ALL: [RoundingMode; 3] = [
        RoundingMode::Truncate,
        RoundingMode::Floor,
        RoundingMode::Ceiling,
    ];

    /// Divide `dividend` by `divisor` under this mode.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `divisor` is zero.
    pub fn divide(self, dividend: &BigInt, divisor: &BigInt) -> NumericResult<BigInt> {
        if divisor.is_zero() {
            return Err(NumericError::DivisionByZero);
        }

        Ok(match self {
            RoundingMode::Truncate => dividend / divisor,
            RoundingMode::Floor => dividend.div_floor(divisor),
            // ceil(a / b) == -floor(-a / b)
            RoundingMode::Ceiling => -(-dividend).div_floor(divisor),
        })
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            RoundingMode::Truncate => "trunc",
            RoundingMode::Floor => "floor",
            RoundingMode::Ceiling => "ceil",
        })
    }
}

impl FromStr for RoundingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trunc" | "truncate" => Ok(RoundingMode::Truncate),
            "floor" => Ok(RoundingMode::Floor),
            "ceil" | "ceiling" => Ok(RoundingMode::Ceiling),
            other => Err(format!("unknown rounding mode '{}'", other)),
        }
    }
}
