// ============================================================================
// Decimal Value
// Arbitrary-precision amount expressed in a family's atomic unit
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::rounding::RoundingMode;
use super::scalar::Scalar;
use crate::registry::{pow10, CurrencyFamily, Denomination};
use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use std::cmp::Ordering;
use std::ops::Neg;

/// An exact currency amount.
///
/// `magnitude` is always a count of the family's atomic unit, whatever
/// denomination was used to parse it. Values are immutable; every operation
/// yields a new value.
///
/// # Example
/// ```
/// use crypto_decimal::numeric::{parse, format};
/// use crypto_decimal::registry::{resolve_denomination, CurrencyFamily};
///
/// let btc = resolve_denomination(CurrencyFamily::Bitcoin, "BTC").unwrap();
/// let sat = resolve_denomination(CurrencyFamily::Bitcoin, "SAT").unwrap();
///
/// let half = parse("0.5", btc).unwrap();
/// assert_eq!(format(&half, sat).unwrap(), "50000000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecimalValue {
    family: CurrencyFamily,
    magnitude: BigInt,
}

impl DecimalValue {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a magnitude already in atomic units.
    #[inline]
    pub fn new(family: CurrencyFamily, magnitude: impl Into<BigInt>) -> Self {
        Self {
            family,
            magnitude: magnitude.into(),
        }
    }

    /// The additive identity of `family`.
    #[inline]
    pub fn zero(family: CurrencyFamily) -> Self {
        Self::new(family, BigInt::zero())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn family(&self) -> CurrencyFamily {
        self.family
    }

    /// Signed amount in atomic units.
    #[inline]
    pub fn magnitude(&self) -> &BigInt {
        &self.magnitude
    }

    #[inline]
    pub fn into_magnitude(self) -> BigInt {
        self.magnitude
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    /// Strictly greater than zero.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.magnitude.is_positive()
    }

    /// Strictly less than zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.magnitude.is_negative()
    }

    pub fn abs(&self) -> Self {
        Self::new(self.family, self.magnitude.abs())
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    #[inline]
    fn ensure_same_family(&self, other: &Self) -> NumericResult<()> {
        if self.family == other.family {
            Ok(())
        } else {
            Err(NumericError::FamilyMismatch {
                left: self.family,
                right: other.family,
            })
        }
    }

    /// Exact addition.
    ///
    /// # Errors
    /// Returns `FamilyMismatch` if the operands belong to different families.
    pub fn checked_add(&self, rhs: &Self) -> NumericResult<Self> {
        self.ensure_same_family(rhs)?;
        Ok(Self::new(self.family, &self.magnitude + &rhs.magnitude))
    }

    /// Exact subtraction.
    ///
    /// # Errors
    /// Returns `FamilyMismatch` if the operands belong to different families.
    pub fn checked_sub(&self, rhs: &Self) -> NumericResult<Self> {
        self.ensure_same_family(rhs)?;
        Ok(Self::new(self.family, &self.magnitude - &rhs.magnitude))
    }

    /// Compare two amounts of the same family.
    pub fn try_cmp(&self, other: &Self) -> NumericResult<Ordering> {
        self.ensure_same_family(other)?;
        Ok(self.magnitude.cmp(&other.magnitude))
    }

    /// Multiply by a decimal factor, truncating toward zero.
    ///
    /// Computes `magnitude * scalar.magnitude / 10^scalar.precision`.
    pub fn mul_scalar(&self, scalar: &Scalar) -> Self {
        let product = &self.magnitude * &scalar.magnitude;
        let magnitude = if scalar.precision == 0 {
            product
        } else {
            product / pow10(scalar.precision)
        };
        Self::new(self.family, magnitude)
    }

    /// Divide by a decimal factor under `rounding`.
    ///
    /// Computes `magnitude * 10^scalar.precision / scalar.magnitude`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if the scalar is zero.
    pub fn checked_div_scalar(&self, scalar: &Scalar, rounding: RoundingMode) -> NumericResult<Self> {
        if scalar.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        let dividend = &self.magnitude * pow10(scalar.precision);
        let magnitude = rounding.divide(&dividend, &scalar.magnitude)?;
        Ok(Self::new(self.family, magnitude))
    }

    // ========================================================================
    // Denomination-bound helpers
    // ========================================================================

    /// Check that `denomination` can be used to display this value.
    pub(crate) fn ensure_denomination(&self, denomination: &Denomination) -> NumericResult<()> {
        if denomination.family == self.family {
            Ok(())
        } else {
            Err(NumericError::DenominationMismatch {
                value: self.family,
                denomination: denomination.symbol,
            })
        }
    }
}

impl Neg for DecimalValue {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(self.family, -self.magnitude)
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl DecimalValue {
    /// Convert from `rust_decimal::Decimal`, read as an amount of
    /// `denomination`.
    ///
    /// Follows the parser: digits beyond the denomination's exponent are
    /// truncated.
    pub fn from_decimal(d: rust_decimal::Decimal, denomination: &Denomination) -> NumericResult<Self> {
        super::parser::parse(&d.to_string(), denomination)
    }

    /// Convert to `rust_decimal::Decimal`, expressed in `denomination`.
    ///
    /// # Errors
    /// - `DenominationMismatch` if `denomination` belongs to another family
    /// - `PrecisionLoss` if the value does not fit 96 bits / 28 decimals
    pub fn to_decimal(&self, denomination: &Denomination) -> NumericResult<rust_decimal::Decimal> {
        let text = super::formatter::format(self, denomination)?;
        rust_decimal::Decimal::from_str_exact(&text).map_err(|_| NumericError::PrecisionLoss)
    }
}
