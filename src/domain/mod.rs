// ============================================================================
// Domain Models Module
// Contains the calculator's value objects
// ============================================================================

pub mod calculation;
pub mod operation;

pub use calculation::{Calculation, CalculationOutcome, CalculationRequest};
pub use operation::Operation;
