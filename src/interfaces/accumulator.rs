// ============================================================================
// Accumulator Interface
// Defines the contract for folding many values into one
// ============================================================================

use crate::numeric::{DecimalValue, NumericResult};

/// Strategy interface for row-wise aggregation.
/// Implementations: Sum, Max, Min.
///
/// State is seeded lazily by the first value, so an accumulator that never
/// saw input finishes with `None` rather than a zero of some arbitrary family.
pub trait Accumulator: Send {
    /// Fold one value into the running state.
    ///
    /// # Errors
    /// Returns `FamilyMismatch` if `value` belongs to a different family than
    /// the values already accumulated. The state is left unchanged.
    fn accumulate(&mut self, value: DecimalValue) -> NumericResult<()>;

    /// The running result, if any value has been accumulated.
    fn current(&self) -> Option<&DecimalValue>;

    /// Take the result and reset to the empty state.
    fn finish(&mut self) -> Option<DecimalValue>;

    /// Get the aggregate name for logging
    fn name(&self) -> &str;

    /// Number of values accumulated since the last reset.
    fn count(&self) -> usize;
}
