// ============================================================================
// Numeric Module
// Exact decimal arithmetic over atomic-unit magnitudes
// ============================================================================
//
// This module provides:
// - DecimalValue: signed arbitrary-precision amount tagged with its family
// - Grammar validation, parsing and canonical formatting of decimal strings
// - Add/sub/compare and scalar multiply/divide with three rounding modes
// - NumericError: Error types for all fallible operations
//
// Design principles:
// - No floating-point operations
// - All fallible operations return Result (no panics)
// - Magnitudes are always in the family's atomic unit; denominations only
//   matter at parse/format time

mod arithmetic;
mod decimal_value;
mod errors;
mod formatter;
mod grammar;
mod parser;
mod rounding;
mod scalar;

pub use arithmetic::{
    add, compare, divide_by_scalar, is_negative, is_positive, is_zero, multiply_by_scalar, sub,
};
pub use decimal_value::DecimalValue;
pub use errors::{NumericError, NumericResult};
pub use formatter::{convert, format};
pub use grammar::is_valid_decimal;
pub use parser::{parse, scale_by_natural_precision};
pub use rounding::RoundingMode;
pub use scalar::Scalar;
