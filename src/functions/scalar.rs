// ============================================================================
// Scalar Functions
// Symbol-and-string entry points over the decimal engine
// ============================================================================

use super::errors::{DenominationRole, FunctionError, FunctionErrorKind, FunctionResult, Operand};
use crate::config::EngineConfig;
use crate::numeric::{
    add, compare, divide_by_scalar, format, multiply_by_scalar, parse, sub, DecimalValue,
    NumericError, RoundingMode, Scalar,
};
use crate::registry::{resolve_denomination, resolve_family, CurrencyFamily, Denomination};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Scalar Operations
// ============================================================================

/// Two-operand operations available through `Functions::call_scalar`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarOp {
    Add,
    Sub,
    Mul,
    DivTrunc,
    DivFloor,
    DivCeil,
}

impl ScalarOp {
    pub const ALL: [ScalarOp; 6] = [
        ScalarOp::Add,
        ScalarOp::Sub,
        ScalarOp::Mul,
        ScalarOp::DivTrunc,
        ScalarOp::DivFloor,
        ScalarOp::DivCeil,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ScalarOp::Add => "crypto_add",
            ScalarOp::Sub => "crypto_sub",
            ScalarOp::Mul => "crypto_mul",
            ScalarOp::DivTrunc => "crypto_div_trunc",
            ScalarOp::DivFloor => "crypto_div_floor",
            ScalarOp::DivCeil => "crypto_div_ceil",
        }
    }

    /// Rounding mode for the division variants
    pub const fn rounding(self) -> Option<RoundingMode> {
        match self {
            ScalarOp::DivTrunc => Some(RoundingMode::Truncate),
            ScalarOp::DivFloor => Some(RoundingMode::Floor),
            ScalarOp::DivCeil => Some(RoundingMode::Ceiling),
            _ => None,
        }
    }

    /// True when the second operand is a dimensionless scalar
    pub const fn takes_scalar(self) -> bool {
        !matches!(self, ScalarOp::Add | ScalarOp::Sub)
    }
}

impl fmt::Display for ScalarOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScalarOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScalarOp::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| format!("unknown function '{}'", s))
    }
}

const SCALE: &str = "crypto_scale";
const COMPARE: &str = "crypto_cmp";

// ============================================================================
// Resolution helpers (shared with the aggregate surface)
// ============================================================================

pub(crate) fn family_for(function: &'static str, symbol: &str) -> FunctionResult<CurrencyFamily> {
    resolve_family(symbol)
        .ok_or_else(|| FunctionError::new(function, FunctionErrorKind::InvalidFamily))
}

pub(crate) fn denomination_for(
    function: &'static str,
    family: CurrencyFamily,
    symbol: &str,
    role: DenominationRole,
) -> FunctionResult<&'static Denomination> {
    resolve_denomination(family, symbol)
        .ok_or_else(|| FunctionError::new(function, FunctionErrorKind::InvalidDenomination(role)))
}

/// Parse `text` under `denomination`, honoring the configured length cap.
pub(crate) fn operand_for(
    config: &EngineConfig,
    function: &'static str,
    text: &str,
    denomination: &Denomination,
    operand: Operand,
) -> FunctionResult<DecimalValue> {
    let invalid = || FunctionError::new(function, FunctionErrorKind::InvalidDecimal(operand));
    if !config.accepts_length(text) {
        return Err(invalid());
    }
    parse(text, denomination).map_err(|err| match err {
        NumericError::InvalidDecimal => invalid(),
        other => FunctionError::from_numeric(function, other),
    })
}

// ============================================================================
// Function Surface
// ============================================================================

/// Entry point for the string-level functions.
///
/// Every call resolves symbols first, then parses operands, then runs the
/// engine operation, so the first failing step decides the error.
#[derive(Debug, Clone, Default)]
pub struct Functions {
    config: EngineConfig,
}

impl Functions {
    /// Creates the surface after validating `config`
    pub fn new(config: EngineConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run `op` over two operand strings, formatting the result in
    /// `denomination_symbol`.
    ///
    /// For `Add`/`Sub` both operands are amounts in the given denomination.
    /// For `Mul` and the divisions the second operand is a scalar.
    ///
    /// # Example
    /// ```
    /// use crypto_decimal::functions::{Functions, ScalarOp};
    ///
    /// let functions = Functions::default();
    /// let total = functions
    ///     .call_scalar(ScalarOp::Add, "BTC", "BTC", "1.5", "0.25")
    ///     .unwrap();
    /// assert_eq!(total, "1.75000000");
    /// ```
    pub fn call_scalar(
        &self,
        op: ScalarOp,
        family_symbol: &str,
        denomination_symbol: &str,
        a: &str,
        b: &str,
    ) -> FunctionResult<String> {
        self.run_scalar(op, family_symbol, denomination_symbol, a, b)
            .inspect(|out| tracing::trace!(function = op.name(), result = %out, "call completed"))
            .inspect_err(|err| tracing::debug!(error = %err, "call rejected"))
    }

    fn run_scalar(
        &self,
        op: ScalarOp,
        family_symbol: &str,
        denomination_symbol: &str,
        a: &str,
        b: &str,
    ) -> FunctionResult<String> {
        let function = op.name();
        let family = family_for(function, family_symbol)?;
        let denomination =
            denomination_for(function, family, denomination_symbol, DenominationRole::Shared)?;
        let lhs = operand_for(&self.config, function, a, denomination, Operand::First)?;

        let result = if op.takes_scalar() {
            let scalar = self.scalar(function, b)?;
            match op.rounding() {
                Some(mode) => divide_by_scalar(&lhs, &scalar, mode),
                None => Ok(multiply_by_scalar(&lhs, &scalar)),
            }
        } else {
            let rhs = operand_for(&self.config, function, b, denomination, Operand::Second)?;
            match op {
                ScalarOp::Sub => sub(&lhs, &rhs),
                _ => add(&lhs, &rhs),
            }
        }
        .map_err(|err| FunctionError::from_numeric(function, err))?;

        format(&result, denomination).map_err(|err| FunctionError::from_numeric(function, err))
    }

    /// Re-express `operand` from one denomination of `family_symbol` in another.
    pub fn scale(
        &self,
        family_symbol: &str,
        from_symbol: &str,
        to_symbol: &str,
        operand: &str,
    ) -> FunctionResult<String> {
        self.run_scale(family_symbol, from_symbol, to_symbol, operand)
            .inspect(|out| tracing::trace!(function = SCALE, result = %out, "call completed"))
            .inspect_err(|err| tracing::debug!(error = %err, "call rejected"))
    }

    fn run_scale(
        &self,
        family_symbol: &str,
        from_symbol: &str,
        to_symbol: &str,
        operand: &str,
    ) -> FunctionResult<String> {
        let family = family_for(SCALE, family_symbol)?;
        let from = denomination_for(SCALE, family, from_symbol, DenominationRole::From)?;
        let to = denomination_for(SCALE, family, to_symbol, DenominationRole::To)?;
        let value = operand_for(&self.config, SCALE, operand, from, Operand::Single)?;
        format(&value, to).map_err(|err| FunctionError::from_numeric(SCALE, err))
    }

    /// Compare two amounts, returning -1, 0 or 1.
    pub fn compare_str(
        &self,
        family_symbol: &str,
        denomination_symbol: &str,
        a: &str,
        b: &str,
    ) -> FunctionResult<i32> {
        self.run_compare(family_symbol, denomination_symbol, a, b)
            .inspect_err(|err| tracing::debug!(error = %err, "call rejected"))
    }

    fn run_compare(
        &self,
        family_symbol: &str,
        denomination_symbol: &str,
        a: &str,
        b: &str,
    ) -> FunctionResult<i32> {
        let family = family_for(COMPARE, family_symbol)?;
        let denomination =
            denomination_for(COMPARE, family, denomination_symbol, DenominationRole::Shared)?;
        let lhs = operand_for(&self.config, COMPARE, a, denomination, Operand::First)?;
        let rhs = operand_for(&self.config, COMPARE, b, denomination, Operand::Second)?;
        let ordering =
            compare(&lhs, &rhs).map_err(|err| FunctionError::from_numeric(COMPARE, err))?;
        Ok(ordering as i32)
    }

    fn scalar(&self, function: &'static str, text: &str) -> FunctionResult<Scalar> {
        let invalid = || FunctionError::new(function, FunctionErrorKind::InvalidDecimal(Operand::Second));
        if !self.config.accepts_length(text) {
            return Err(invalid());
        }
        Scalar::parse(text).map_err(|_| invalid())
    }
}
