// ============================================================================
// Decimal Parser
// Decimal strings to atomic-unit magnitudes
// ============================================================================

use super::decimal_value::DecimalValue;
use super::errors::{NumericError, NumericResult};
use super::grammar::{split_sign, trim_ascii_ws};
use crate::registry::{pow10, Denomination};
use num_bigint::BigInt;
use num_traits::Zero;

/// Parse a run of ASCII digits. Empty input is zero.
fn parse_digits(digits: &str) -> NumericResult<BigInt> {
    if digits.is_empty() {
        return Ok(BigInt::zero());
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NumericError::InvalidDecimal);
    }
    BigInt::parse_bytes(digits.as_bytes(), 10).ok_or(NumericError::InvalidDecimal)
}

/// Trimmed, sign-split input broken at the first `.`.
struct Parts<'a> {
    negative: bool,
    whole: &'a str,
    fraction: Option<&'a str>,
}

fn split_parts(text: &str) -> NumericResult<Parts<'_>> {
    let (negative, body) = split_sign(trim_ascii_ws(text));
    let (whole, fraction) = match body.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (body, None),
    };

    // A bare sign or a lone point carries no digits
    if whole.is_empty() && fraction.is_none_or(str::is_empty) {
        return Err(NumericError::InvalidDecimal);
    }

    Ok(Parts {
        negative,
        whole,
        fraction,
    })
}

/// Parse `text` as an amount of `denomination`.
///
/// The result is expressed in the family's atomic unit. Fraction digits past
/// the denomination's exponent are dropped (truncation, no rounding), but are
/// still required to be digits.
///
/// # Errors
/// Returns `InvalidDecimal` for anything [`is_valid_decimal`] would reject.
///
/// [`is_valid_decimal`]: super::is_valid_decimal
pub fn parse(text: &str, denomination: &Denomination) -> NumericResult<DecimalValue> {
    let parts = split_parts(text)?;
    let scale = usize::from(denomination.scale_exponent);

    let mut magnitude = parse_digits(parts.whole)? * denomination.scale_factor();

    if let Some(fraction) = parts.fraction {
        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NumericError::InvalidDecimal);
        }
        // All-ASCII at this point, byte slicing is safe
        let kept = &fraction[..fraction.len().min(scale)];
        let padded = format!("{:0<width$}", kept, width = scale);
        magnitude += parse_digits(&padded)?;
    }

    if parts.negative {
        magnitude = -magnitude;
    }

    Ok(DecimalValue::new(denomination.family, magnitude))
}

/// Parse `text` using its own number of fraction digits as the scale.
///
/// Returns `(magnitude, precision)` such that the number equals
/// `magnitude / 10^precision`. `"0.5"` gives `(5, 1)`, `"-2.50"` gives
/// `(-250, 2)`.
pub fn scale_by_natural_precision(text: &str) -> NumericResult<(BigInt, u32)> {
    let parts = split_parts(text)?;
    let fraction = parts.fraction.unwrap_or("");
    let precision = u32::try_from(fraction.len()).map_err(|_| NumericError::Overflow)?;

    let whole = parse_digits(parts.whole)?;
    let frac = parse_digits(fraction)?;
    let mut magnitude = whole * pow10(precision) + frac;
    if parts.negative {
        magnitude = -magnitude;
    }

    Ok((magnitude, precision))
}
