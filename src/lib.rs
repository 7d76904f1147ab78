// ============================================================================
// Crypto Decimal Library
// Exact fixed-point arithmetic for multi-denomination currency amounts
// ============================================================================

//! # Crypto Decimal
//!
//! Exact, arbitrary-precision decimal arithmetic for currency families that
//! are quoted in several denominations (BTC / mBTC / μBTC / SAT, ETH / GWEI /
//! WEI, ...).
//!
//! ## Features
//!
//! - **Atomic-unit magnitudes** backed by `num-bigint`: no floating point, no overflow
//! - **Static denomination registry** for 12 families, resolvable by symbol
//! - **Strict decimal grammar** with truncating parse and canonical formatting
//! - **Scalar multiply/divide** with Truncate, Floor and Ceiling rounding
//! - **Accumulators** for sum/max/min folds and a string-level call surface
//!
//! ## Example
//!
//! ```rust
//! use crypto_decimal::prelude::*;
//!
//! let registry = Registry::global();
//! let btc = registry.atomic_unit(CurrencyFamily::Bitcoin).unwrap();
//! assert_eq!(btc.symbol, "SAT");
//!
//! let btc = resolve_denomination(CurrencyFamily::Bitcoin, "BTC").unwrap();
//! let sat = resolve_denomination(CurrencyFamily::Bitcoin, "SAT").unwrap();
//!
//! let a = parse("1.5", btc).unwrap();
//! let b = parse("2500", sat).unwrap();
//! let total = add(&a, &b).unwrap();
//!
//! assert_eq!(format(&total, btc).unwrap(), "1.50002500");
//! assert_eq!(format(&total, sat).unwrap(), "150002500");
//!
//! let third = divide_by_scalar(&total, &Scalar::integer(3), RoundingMode::Ceiling).unwrap();
//! assert_eq!(format(&third, sat).unwrap(), "50000834");
//! ```

pub mod aggregate;
pub mod config;
pub mod functions;
pub mod interfaces;
pub mod numeric;
pub mod registry;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::aggregate::{
        create_accumulator, fold_values, AggregateKind, MaxAccumulator, MinAccumulator,
        SumAccumulator,
    };
    pub use crate::config::{EngineConfig, InvalidOperandPolicy};
    pub use crate::functions::{Aggregate, FunctionError, FunctionResult, Functions, ScalarOp};
    pub use crate::interfaces::Accumulator;
    pub use crate::numeric::{
        add, compare, convert, divide_by_scalar, format, is_negative, is_positive,
        is_valid_decimal, is_zero, multiply_by_scalar, parse, sub, DecimalValue, NumericError,
        NumericResult, RoundingMode, Scalar,
    };
    pub use crate::registry::{
        resolve_denomination, resolve_family, CurrencyFamily, Denomination, Registry,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use crate::registry::DENOMINATIONS;
    use num_bigint::BigInt;
    use proptest::prelude::*;
    use quickcheck::quickcheck;
    use rust_decimal::Decimal;
    use std::cmp::Ordering;

    fn denom(family: CurrencyFamily, symbol: &str) -> &'static Denomination {
        resolve_denomination(family, symbol).unwrap()
    }

    #[test]
    fn test_eth_addition_in_two_denominations() {
        let eth = denom(CurrencyFamily::Ethereum, "ETH");
        let gwei = denom(CurrencyFamily::Ethereum, "GWEI");

        let a = parse("1.234567891", eth).unwrap();
        let b = parse("0.765432109", eth).unwrap();
        let sum = add(&a, &b).unwrap();

        assert_eq!(format(&sum, eth).unwrap(), "2");
        assert_eq!(format(&sum, gwei).unwrap(), "2000000000");
    }

    #[test]
    fn test_btc_subtraction_formatted_in_millibits() {
        let btc = denom(CurrencyFamily::Bitcoin, "BTC");
        let mbtc = denom(CurrencyFamily::Bitcoin, "mBTC");

        let diff = sub(&parse("1", btc).unwrap(), &parse("0.5", btc).unwrap()).unwrap();
        // 0.5 BTC is 500 mBTC
        assert_eq!(format(&diff, mbtc).unwrap(), "500");
        assert_eq!(format(&diff, btc).unwrap(), "0.50000000");
    }

    #[test]
    fn test_scalar_scenarios() {
        let btc = denom(CurrencyFamily::Bitcoin, "BTC");

        let one = parse("1", btc).unwrap();
        let third = divide_by_scalar(&one, &Scalar::new(3, 0), RoundingMode::Truncate).unwrap();
        assert_eq!(format(&third, btc).unwrap(), "0.33333333");

        let half = parse("0.5", btc).unwrap();
        let quarter = multiply_by_scalar(&half, &Scalar::new(5, 1));
        assert_eq!(format(&quarter, btc).unwrap(), "0.25000000");
    }

    #[test]
    fn test_validator_scenarios() {
        assert!(!is_valid_decimal("123.45.67"));
        assert!(is_valid_decimal("-.01"));
    }

    #[test]
    fn test_whole_amount_has_no_point() {
        let btc = denom(CurrencyFamily::Bitcoin, "BTC");
        assert_eq!(format(&parse("1", btc).unwrap(), btc).unwrap(), "1");
    }

    #[test]
    fn test_parse_truncates() {
        let btc = denom(CurrencyFamily::Bitcoin, "BTC");
        assert_eq!(
            parse("1.23456789012345678901234567890123456789", btc).unwrap(),
            parse("1.23456789", btc).unwrap()
        );
    }

    #[test]
    fn test_cross_denomination_equivalence() {
        let sat = parse("50000000", denom(CurrencyFamily::Bitcoin, "SAT")).unwrap();
        let btc = parse("0.5", denom(CurrencyFamily::Bitcoin, "BTC")).unwrap();
        let ubtc = parse("500000", denom(CurrencyFamily::Bitcoin, "μBTC")).unwrap();
        assert_eq!(sat, btc);
        assert_eq!(btc, ubtc);
    }

    #[test]
    fn test_division_by_zero_is_an_error() {
        let btc = denom(CurrencyFamily::Bitcoin, "BTC");
        let one = parse("1", btc).unwrap();
        for mode in RoundingMode::ALL {
            assert_eq!(
                divide_by_scalar(&one, &Scalar::new(0, 0), mode),
                Err(NumericError::DivisionByZero)
            );
        }
    }

    #[test]
    fn test_function_surface_matches_engine() {
        let functions = Functions::default();
        assert_eq!(
            functions
                .call_scalar(ScalarOp::Add, "ETH", "ETH", "1.234567891", "0.765432109")
                .unwrap(),
            "2"
        );
        assert_eq!(functions.scale("ETH", "ETH", "GWEI", "2").unwrap(), "2000000000");

        let mut max = Aggregate::new(AggregateKind::Max, "BTC", "BTC", "mBTC", &EngineConfig::new())
            .unwrap();
        for row in ["0.1", "0.25", "0.2"] {
            max.step(Some(row)).unwrap();
        }
        assert_eq!(max.finish().unwrap(), Some("250".to_string()));
    }

    #[test]
    fn test_registry_is_consistent() {
        assert_eq!(Registry::global().check_invariants(), Ok(()));
    }

    // ------------------------------------------------------------------------
    // Properties
    // ------------------------------------------------------------------------

    fn any_denomination() -> impl Strategy<Value = &'static Denomination> {
        proptest::sample::select(DENOMINATIONS.iter().collect::<Vec<_>>())
    }

    proptest! {
        /// parse(format(v, D), D) == v
        #[test]
        fn prop_format_parse_round_trip(d in any_denomination(), raw in any::<i128>()) {
            let value = DecimalValue::new(d.family, raw);
            let text = format(&value, d).unwrap();
            prop_assert!(is_valid_decimal(&text));
            prop_assert_eq!(parse(&text, d).unwrap(), value);
        }

        /// The same amount written in BTC, μBTC and SAT lands on one magnitude
        #[test]
        fn prop_bitcoin_denominations_agree(whole in 0u64..21_000_000, frac in 0u64..100_000_000) {
            let sats = u128::from(whole) * 100_000_000 + u128::from(frac);
            let in_btc = format!("{}.{:08}", whole, frac);
            let in_ubtc = format!("{}.{:02}", sats / 100, sats % 100);

            let a = parse(&in_btc, denom(CurrencyFamily::Bitcoin, "BTC")).unwrap();
            let b = parse(&sats.to_string(), denom(CurrencyFamily::Bitcoin, "SAT")).unwrap();
            let c = parse(&in_ubtc, denom(CurrencyFamily::Bitcoin, "μBTC")).unwrap();
            prop_assert_eq!(&a, &b);
            prop_assert_eq!(&b, &c);
            prop_assert_eq!(a.magnitude(), &BigInt::from(sats));
        }

        /// add agrees with exact decimal addition
        #[test]
        fn prop_addition_is_exact(a in any::<i64>(), b in any::<i64>()) {
            let btc = denom(CurrencyFamily::Bitcoin, "BTC");
            let lhs = Decimal::new(a, 8);
            let rhs = Decimal::new(b, 8);

            let sum = add(
                &DecimalValue::from_decimal(lhs, btc).unwrap(),
                &DecimalValue::from_decimal(rhs, btc).unwrap(),
            )
            .unwrap();
            prop_assert_eq!(sum.to_decimal(btc).unwrap(), lhs + rhs);
        }

        /// floor <= trunc <= ceil, at most one unit apart, equal when exact
        #[test]
        fn prop_rounding_modes_bracket_quotient(
            raw in any::<i64>(),
            divisor in any::<i32>().prop_filter("non-zero", |d| *d != 0),
            precision in 0u32..6,
        ) {
            let value = DecimalValue::new(CurrencyFamily::Ethereum, raw);
            let scalar = Scalar::new(divisor, precision);

            let trunc = divide_by_scalar(&value, &scalar, RoundingMode::Truncate).unwrap();
            let floor = divide_by_scalar(&value, &scalar, RoundingMode::Floor).unwrap();
            let ceil = divide_by_scalar(&value, &scalar, RoundingMode::Ceiling).unwrap();

            prop_assert_ne!(compare(&floor, &trunc).unwrap(), Ordering::Greater);
            prop_assert_ne!(compare(&trunc, &ceil).unwrap(), Ordering::Greater);

            let spread = ceil.magnitude() - floor.magnitude();
            let numerator = BigInt::from(raw) * BigInt::from(10u8).pow(precision);
            if (numerator % BigInt::from(divisor)) == BigInt::from(0) {
                prop_assert_eq!(spread, BigInt::from(0));
            } else {
                prop_assert_eq!(spread, BigInt::from(1));
            }
        }
    }

    quickcheck! {
        fn qc_validator_is_total_and_matches_parser(text: String) -> bool {
            let btc = denom(CurrencyFamily::Bitcoin, "BTC");
            is_valid_decimal(&text) == parse(&text, btc).is_ok()
        }
    }
}
