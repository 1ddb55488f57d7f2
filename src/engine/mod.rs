// ============================================================================
// Engine Module
// Arithmetic evaluation and the calculator service
// ============================================================================

pub mod calculator;
pub mod evaluator;

pub use calculator::Calculator;
pub use evaluator::evaluate;
