// ============================================================================
// Numeric Errors
// Error types for decimal parsing, formatting, and arithmetic
// ============================================================================

use crate::registry::CurrencyFamily;
use thiserror::Error;

/// Errors that can occur in the decimal engine.
///
/// None of these are fatal: caller-supplied mismatches and zero divisors are
/// reported here instead of aborting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumericError {
    /// Operands belong to different currency families
    #[error("family mismatch: cannot combine {left} with {right}")]
    FamilyMismatch {
        left: CurrencyFamily,
        right: CurrencyFamily,
    },
    /// Denomination does not belong to the value's family
    #[error("denomination {denomination} does not belong to family {value}")]
    DenominationMismatch {
        value: CurrencyFamily,
        denomination: &'static str,
    },
    /// Attempted division by zero
    #[error("division by zero")]
    DivisionByZero,
    /// Input string is not a decimal number
    #[error("invalid decimal: could not parse value")]
    InvalidDecimal,
    /// Conversion would lose significant digits
    #[error("precision loss: conversion would lose significant digits")]
    PrecisionLoss,
    /// Value does not fit the target representation
    #[error("arithmetic overflow: value does not fit the target type")]
    Overflow,
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(NumericError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            NumericError::FamilyMismatch {
                left: CurrencyFamily::Bitcoin,
                right: CurrencyFamily::Ethereum,
            }
            .to_string(),
            "family mismatch: cannot combine BTC with ETH"
        );
        assert_eq!(
            NumericError::DenominationMismatch {
                value: CurrencyFamily::Bitcoin,
                denomination: "GWEI",
            }
            .to_string(),
            "denomination GWEI does not belong to family BTC"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::InvalidDecimal, NumericError::InvalidDecimal);
        assert_ne!(NumericError::InvalidDecimal, NumericError::PrecisionLoss);
    }
}
