// ============================================================================
// Arithmetic Engine
// Free-function surface over DecimalValue
// ============================================================================

use super::decimal_value::DecimalValue;
use super::errors::NumericResult;
use super::rounding::RoundingMode;
use super::scalar::Scalar;
use std::cmp::Ordering;

/// `a + b`. Both operands must share a family.
#[inline]
pub fn add(a: &DecimalValue, b: &DecimalValue) -> NumericResult<DecimalValue> {
    a.checked_add(b)
}

/// `a - b`. Both operands must share a family.
#[inline]
pub fn sub(a: &DecimalValue, b: &DecimalValue) -> NumericResult<DecimalValue> {
    a.checked_sub(b)
}

#[inline]
pub fn compare(a: &DecimalValue, b: &DecimalValue) -> NumericResult<Ordering> {
    a.try_cmp(b)
}

#[inline]
pub fn is_zero(a: &DecimalValue) -> bool {
    a.is_zero()
}

#[inline]
pub fn is_positive(a: &DecimalValue) -> bool {
    a.is_positive()
}

#[inline]
pub fn is_negative(a: &DecimalValue) -> bool {
    a.is_negative()
}

/// `a * scalar`, truncated toward zero to whole atomic units.
#[inline]
pub fn multiply_by_scalar(a: &DecimalValue, scalar: &Scalar) -> DecimalValue {
    a.mul_scalar(scalar)
}

/// `a / scalar`, resolved to whole atomic units under `rounding`.
#[inline]
pub fn divide_by_scalar(
    a: &DecimalValue,
    scalar: &Scalar,
    rounding: RoundingMode,
) -> NumericResult<DecimalValue> {
    a.checked_div_scalar(scalar, rounding)
}
