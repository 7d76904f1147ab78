// ============================================================================
// Decimal Formatter
// Atomic-unit magnitudes to canonical decimal strings
// ============================================================================

use super::decimal_value::DecimalValue;
use super::errors::{NumericError, NumericResult};
use super::parser::parse;
use crate::registry::Denomination;
use num_integer::Integer;
use num_traits::{Signed, Zero};

/// Render `value` as a decimal string in `denomination`.
///
/// Whole amounts print without a point (`"1"`, not `"1.00000000"`). Otherwise
/// the fraction is printed with exactly `scale_exponent` digits. Never uses
/// exponent notation.
///
/// # Errors
/// Returns `DenominationMismatch` if `denomination` belongs to another family.
pub fn format(value: &DecimalValue, denomination: &Denomination) -> NumericResult<String> {
    value.ensure_denomination(denomination)?;

    let (quotient, remainder) = value
        .magnitude()
        .abs()
        .div_rem(&denomination.scale_factor());

    let mut out = String::new();
    if value.is_negative() {
        out.push('-');
    }
    out.push_str(&quotient.to_string());

    if !remainder.is_zero() {
        let digits = remainder.to_string();
        let width = usize::from(denomination.scale_exponent);
        out.push('.');
        out.push_str(&format!("{:0>width$}", digits, width = width));
    }

    Ok(out)
}

/// Re-express `text`, an amount of `from`, in `to`.
///
/// # Errors
/// - `InvalidDecimal` if `text` does not parse
/// - `DenominationMismatch` if `from` and `to` belong to different families
pub fn convert(text: &str, from: &Denomination, to: &Denomination) -> NumericResult<String> {
    if from.family != to.family {
        return Err(NumericError::DenominationMismatch {
            value: from.family,
            denomination: to.symbol,
        });
    }
    format(&parse(text, from)?, to)
}
