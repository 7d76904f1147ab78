// ============================================================================
// Accumulator Factory
// Creates accumulators by aggregate kind
// ============================================================================

use super::{MaxAccumulator, MinAccumulator, SumAccumulator};
use crate::interfaces::Accumulator;
use crate::numeric::{DecimalValue, NumericResult};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The supported row-wise aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AggregateKind {
    Sum,
    Max,
    Min,
}

impl AggregateKind {
    pub const ALL: [AggregateKind; 3] = [AggregateKind::Sum, AggregateKind::Max, AggregateKind::Min];

    /// Stable function name reported in errors.
    pub const fn function_name(self) -> &'static str {
        match self {
            AggregateKind::Sum => "crypto_sum",
            AggregateKind::Max => "crypto_max",
            AggregateKind::Min => "crypto_min",
        }
    }
}

impl fmt::Display for AggregateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.function_name())
    }
}

impl FromStr for AggregateKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AggregateKind::ALL
            .into_iter()
            .find(|k| k.function_name() == s)
            .ok_or_else(|| format!("unknown aggregate '{}'", s))
    }
}

/// Creates the accumulator for `kind`.
pub fn create_accumulator(kind: AggregateKind) -> Box<dyn Accumulator> {
    match kind {
        AggregateKind::Sum => Box::new(SumAccumulator::new()),
        AggregateKind::Max => Box::new(MaxAccumulator::new()),
        AggregateKind::Min => Box::new(MinAccumulator::new()),
    }
}

/// Fold `values` in iteration order with a fresh accumulator of `kind`.
///
/// Returns `Ok(None)` for empty input.
pub fn fold_values<I>(kind: AggregateKind, values: I) -> NumericResult<Option<DecimalValue>>
where
    I: IntoIterator<Item = DecimalValue>,
{
    let mut accumulator = create_accumulator(kind);
    for value in values {
        accumulator.accumulate(value)?;
    }
    Ok(accumulator.finish())
}
