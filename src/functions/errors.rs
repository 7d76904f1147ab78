// ============================================================================
// Function Errors
// Errors reported by the string-level call surface
// ============================================================================

use crate::numeric::NumericError;
use std::fmt;
use thiserror::Error;

/// Which denomination argument failed to resolve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenominationRole {
    /// The single denomination of a scalar call
    Shared,
    From,
    To,
    Final,
    Operand,
}

impl fmt::Display for DenominationRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenominationRole::Shared => f.write_str("Invalid denomination"),
            DenominationRole::From => f.write_str("Invalid from denomination"),
            DenominationRole::To => f.write_str("Invalid to denomination"),
            DenominationRole::Final => f.write_str("Invalid final denomination"),
            DenominationRole::Operand => f.write_str("Invalid operand denomination"),
        }
    }
}

/// Which operand failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    First,
    Second,
    /// The only operand of `scale` or an aggregate step
    Single,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::First => f.write_str("Invalid decimal format for first operand"),
            Operand::Second => f.write_str("Invalid decimal format for second operand"),
            Operand::Single => f.write_str("Invalid decimal format for operand"),
        }
    }
}

/// What went wrong inside a call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FunctionErrorKind {
    #[error("Invalid crypto type")]
    InvalidFamily,
    #[error("{0}")]
    InvalidDenomination(DenominationRole),
    #[error("{0}")]
    InvalidDecimal(Operand),
    #[error("Division by zero")]
    DivisionByZero,
    #[error(transparent)]
    Numeric(#[from] NumericError),
}

/// A failed call, tagged with the function name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{function}: {kind}")]
pub struct FunctionError {
    pub function: &'static str,
    pub kind: FunctionErrorKind,
}

impl FunctionError {
    pub fn new(function: &'static str, kind: impl Into<FunctionErrorKind>) -> Self {
        Self {
            function,
            kind: kind.into(),
        }
    }

    /// Attach `function` to an engine error, promoting zero divisors to the
    /// dedicated kind.
    pub(crate) fn from_numeric(function: &'static str, err: NumericError) -> Self {
        match err {
            NumericError::DivisionByZero => Self::new(function, FunctionErrorKind::DivisionByZero),
            other => Self::new(function, other),
        }
    }
}

pub type FunctionResult<T> = Result<T, FunctionError>;
