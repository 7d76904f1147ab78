// ============================================================================
// Functions Module
// String-level call surface keyed by family and denomination symbols
// ============================================================================
//
// Mirrors the shape of a host-function API: every argument arrives as text,
// every failure comes back as a FunctionError naming the function.

mod aggregate;
mod errors;
mod scalar;

pub use aggregate::Aggregate;
pub use errors::{DenominationRole, FunctionError, FunctionErrorKind, FunctionResult, Operand};
pub use scalar::{Functions, ScalarOp};
