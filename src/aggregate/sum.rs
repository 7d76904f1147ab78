// ============================================================================
// Sum Accumulator
// Exact running total via repeated addition
// ============================================================================

use crate::interfaces::Accumulator;
use crate::numeric::{DecimalValue, NumericResult};

/// Running total. Starts from the additive identity of the first value's
/// family.
#[derive(Debug, Default, Clone)]
pub struct SumAccumulator {
    total: Option<DecimalValue>,
    count: usize,
}

impl SumAccumulator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Accumulator for SumAccumulator {
    fn accumulate(&mut self, value: DecimalValue) -> NumericResult<()> {
        let total = self
            .total
            .get_or_insert_with(|| DecimalValue::zero(value.family()));
        *total = total.checked_add(&value)?;
        self.count += 1;
        Ok(())
    }

    fn current(&self) -> Option<&DecimalValue> {
        self.total.as_ref()
    }

    fn finish(&mut self) -> Option<DecimalValue> {
        self.count = 0;
        self.total.take()
    }

    fn name(&self) -> &str {
        "sum"
    }

    fn count(&self) -> usize {
        self.count
    }
}
