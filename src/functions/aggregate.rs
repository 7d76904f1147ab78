// ============================================================================
// Aggregate Functions
// Row-at-a-time sum/max/min over operand strings
// ============================================================================

use super::errors::{DenominationRole, FunctionError, FunctionErrorKind, FunctionResult, Operand};
use super::scalar::{denomination_for, family_for, operand_for};
use crate::aggregate::{create_accumulator, AggregateKind};
use crate::config::{EngineConfig, InvalidOperandPolicy};
use crate::interfaces::Accumulator;
use crate::numeric::format;
use crate::registry::{CurrencyFamily, Denomination};

/// A running aggregate fed one operand string per row.
///
/// Operands are read in `operand_denomination`; the result is rendered in
/// `final_denomination`. An aggregate that saw no accepted rows finishes
/// with `None`.
///
/// # Example
/// ```
/// use crypto_decimal::aggregate::AggregateKind;
/// use crypto_decimal::config::EngineConfig;
/// use crypto_decimal::functions::Aggregate;
///
/// let mut sum = Aggregate::new(AggregateKind::Sum, "BTC", "SAT", "BTC", &EngineConfig::new()).unwrap();
/// sum.step(Some("50000000")).unwrap();
/// sum.step(None).unwrap();
/// sum.step(Some("25000000")).unwrap();
/// assert_eq!(sum.finish().unwrap(), Some("0.75000000".to_string()));
/// ```
pub struct Aggregate {
    kind: AggregateKind,
    family: CurrencyFamily,
    operand_denomination: &'static Denomination,
    final_denomination: &'static Denomination,
    config: EngineConfig,
    accumulator: Box<dyn Accumulator>,
}

impl Aggregate {
    /// Resolves all symbols up front; a bad symbol fails here rather than on
    /// the first row.
    pub fn new(
        kind: AggregateKind,
        family_symbol: &str,
        operand_symbol: &str,
        final_symbol: &str,
        config: &EngineConfig,
    ) -> FunctionResult<Self> {
        let function = kind.function_name();
        let family = family_for(function, family_symbol)?;
        let final_denomination =
            denomination_for(function, family, final_symbol, DenominationRole::Final)?;
        let operand_denomination =
            denomination_for(function, family, operand_symbol, DenominationRole::Operand)?;

        Ok(Self {
            kind,
            family,
            operand_denomination,
            final_denomination,
            config: config.clone(),
            accumulator: create_accumulator(kind),
        })
    }

    pub fn kind(&self) -> AggregateKind {
        self.kind
    }

    pub fn family(&self) -> CurrencyFamily {
        self.family
    }

    /// Number of rows folded so far
    pub fn rows(&self) -> usize {
        self.accumulator.count()
    }

    /// Feed one row. `None` stands for an absent value.
    pub fn step(&mut self, operand: Option<&str>) -> FunctionResult<()> {
        let function = self.kind.function_name();
        let value = match operand {
            Some(text) => operand_for(
                &self.config,
                function,
                text,
                self.operand_denomination,
                Operand::Single,
            ),
            None => Err(FunctionError::new(
                function,
                FunctionErrorKind::InvalidDecimal(Operand::Single),
            )),
        };

        let value = match (value, self.config.invalid_operand_policy) {
            (Ok(value), _) => value,
            (Err(err), InvalidOperandPolicy::Skip)
                if matches!(err.kind, FunctionErrorKind::InvalidDecimal(_)) =>
            {
                tracing::trace!(function, "operand skipped");
                return Ok(());
            }
            (Err(err), _) => {
                tracing::debug!(error = %err, "step rejected");
                return Err(err);
            }
        };

        if self.accumulator.current().is_none() {
            tracing::debug!(function, family = %self.family, "aggregate seeded");
        }
        self.accumulator
            .accumulate(value)
            .map_err(|err| FunctionError::from_numeric(function, err))
    }

    /// Render the result and reset the aggregate.
    pub fn finish(&mut self) -> FunctionResult<Option<String>> {
        let function = self.kind.function_name();
        self.accumulator
            .finish()
            .map(|value| format(&value, self.final_denomination))
            .transpose()
            .map_err(|err| FunctionError::from_numeric(function, err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregate(kind: AggregateKind, config: &EngineConfig) -> Aggregate {
        Aggregate::new(kind, "ETH", "GWEI", "ETH", config).unwrap()
    }

    #[test]
    fn test_sum() {
        let mut sum = aggregate(AggregateKind::Sum, &EngineConfig::new());
        for row in ["1", "2.5", "-0.5"] {
            sum.step(Some(row)).unwrap();
        }
        assert_eq!(sum.rows(), 3);
        assert_eq!(sum.finish().unwrap(), Some("0.000000003000000000".to_string()));
        assert_eq!(sum.finish().unwrap(), None);
    }

    #[test]
    fn test_max_min() {
        let rows = ["7", "-3", "12", "0"];

        let mut max = aggregate(AggregateKind::Max, &EngineConfig::new());
        let mut min = aggregate(AggregateKind::Min, &EngineConfig::new());
        for row in rows {
            max.step(Some(row)).unwrap();
            min.step(Some(row)).unwrap();
        }
        assert_eq!(max.finish().unwrap(), Some("0.000000012000000000".to_string()));
        assert_eq!(min.finish().unwrap(), Some("-0.000000003000000000".to_string()));
    }

    #[test]
    fn test_empty_is_none() {
        let mut max = aggregate(AggregateKind::Max, &EngineConfig::new());
        assert_eq!(max.finish().unwrap(), None);
    }

    #[test]
    fn test_skip_policy() {
        let mut sum = aggregate(AggregateKind::Sum, &EngineConfig::lenient());
        sum.step(None).unwrap();
        sum.step(Some("garbage")).unwrap();
        assert_eq!(sum.finish().unwrap(), None);

        sum.step(Some("1000000000")).unwrap();
        sum.step(Some("1.2.3")).unwrap();
        assert_eq!(sum.rows(), 1);
        assert_eq!(sum.finish().unwrap(), Some("1".to_string()));
    }

    #[test]
    fn test_reject_policy() {
        let mut sum = aggregate(AggregateKind::Sum, &EngineConfig::strict());
        sum.step(Some("1")).unwrap();

        let err = sum.step(Some("x")).unwrap_err();
        assert_eq!(err.to_string(), "crypto_sum: Invalid decimal format for operand");
        assert!(sum.step(None).is_err());

        assert_eq!(sum.finish().unwrap(), Some("0.000000001000000000".to_string()));
    }

    #[test]
    fn test_symbol_errors() {
        let config = EngineConfig::new();
        let err = Aggregate::new(AggregateKind::Min, "NOPE", "SAT", "BTC", &config)
            .err()
            .unwrap();
        assert_eq!(err.to_string(), "crypto_min: Invalid crypto type");

        let err = Aggregate::new(AggregateKind::Sum, "BTC", "SAT", "ETH", &config)
            .err()
            .unwrap();
        assert_eq!(err.to_string(), "crypto_sum: Invalid final denomination");

        let err = Aggregate::new(AggregateKind::Max, "BTC", "GWEI", "BTC", &config)
            .err()
            .unwrap();
        assert_eq!(err.to_string(), "crypto_max: Invalid operand denomination");
    }

    #[test]
    fn test_cross_denomination_rows() {
        let mut sum = Aggregate::new(AggregateKind::Sum, "BTC", "mBTC", "SAT", &EngineConfig::new())
            .unwrap();
        sum.step(Some("1")).unwrap();
        sum.step(Some("0.00001")).unwrap();
        assert_eq!(sum.finish().unwrap(), Some("100001".to_string()));
    }
}
