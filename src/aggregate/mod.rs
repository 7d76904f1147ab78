// ============================================================================
// Aggregate Module
// Row-wise folds over DecimalValue streams
// ============================================================================

mod extremum;
mod sum;

pub mod factory;

pub use extremum::{MaxAccumulator, MinAccumulator};
pub use factory::{create_accumulator, fold_values, AggregateKind};
pub use sum::SumAccumulator;
