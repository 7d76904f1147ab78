// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod accumulator;

pub use accumulator::Accumulator;
