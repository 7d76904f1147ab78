// ============================================================================
// Extremum Accumulators
// Running maximum / minimum via comparison
// ============================================================================

use crate::interfaces::Accumulator;
use crate::numeric::{DecimalValue, NumericResult};
use std::cmp::Ordering;

/// Replace `best` with `value` when `value` compares as `wanted` against it.
/// Ties keep the earlier value.
fn fold_extremum(
    best: &mut Option<DecimalValue>,
    value: DecimalValue,
    wanted: Ordering,
) -> NumericResult<()> {
    match best {
        None => *best = Some(value),
        Some(current) => {
            if value.try_cmp(current)? == wanted {
                *current = value;
            }
        }
    }
    Ok(())
}

/// Largest value seen.
#[derive(Debug, Default, Clone)]
pub struct MaxAccumulator {
    best: Option<DecimalValue>,
    count: usize,
}

impl MaxAccumulator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Accumulator for MaxAccumulator {
    fn accumulate(&mut self, value: DecimalValue) -> NumericResult<()> {
        fold_extremum(&mut self.best, value, Ordering::Greater)?;
        self.count += 1;
        Ok(())
    }

    fn current(&self) -> Option<&DecimalValue> {
        self.best.as_ref()
    }

    fn finish(&mut self) -> Option<DecimalValue> {
        self.count = 0;
        self.best.take()
    }

    fn name(&self) -> &str {
        "max"
    }

    fn count(&self) -> usize {
        self.count
    }
}

/// Smallest value seen.
#[derive(Debug, Default, Clone)]
pub struct MinAccumulator {
    best: Option<DecimalValue>,
    count: usize,
}

impl MinAccumulator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Accumulator for MinAccumulator {
    fn accumulate(&mut self, value: DecimalValue) -> NumericResult<()> {
        fold_extremum(&mut self.best, value, Ordering::Less)?;
        self.count += 1;
        Ok(())
    }

    fn current(&self) -> Option<&DecimalValue> {
        self.best.as_ref()
    }

    fn finish(&mut self) -> Option<DecimalValue> {
        self.count = 0;
        self.best.take()
    }

    fn name(&self) -> &str {
        "min"
    }

    fn count(&self) -> usize {
        self.count
    }
}
