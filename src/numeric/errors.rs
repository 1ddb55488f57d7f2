// ============================================================================
// Calculation Errors
// Classification of every way a calculation can fail
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur while parsing, evaluating, or formatting a calculation.
///
/// Every failure inside the core is converted into one of these kinds before
/// it leaves the crate; nothing is surfaced unclassified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalcError {
    /// Operand string is not a valid decimal literal
    InvalidNumber,
    /// Operation name is not one of add/subtract/multiply/divide
    InvalidOperation,
    /// Divide requested with a zero divisor
    DivisionByZero,
    /// Arithmetic failed unexpectedly (overflow of the decimal range)
    CalculationFailed,
}

impl CalcError {
    /// Stable machine-readable code, used for logging and events.
    pub const fn code(self) -> &'static str {
        match self {
            CalcError::InvalidNumber => "invalid_number",
            CalcError::InvalidOperation => "invalid_operation",
            CalcError::DivisionByZero => "division_by_zero",
            CalcError::CalculationFailed => "calculation_failed",
        }
    }
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::InvalidNumber => write!(f, "Invalid numbers"),
            CalcError::InvalidOperation => write!(f, "Invalid operation"),
            CalcError::DivisionByZero => write!(f, "Cannot divide by zero"),
            CalcError::CalculationFailed => write!(f, "Calculation failed"),
        }
    }
}

impl std::error::Error for CalcError {}

/// Result type alias for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(CalcError::InvalidNumber.to_string(), "Invalid numbers");
        assert_eq!(CalcError::InvalidOperation.to_string(), "Invalid operation");
        assert_eq!(
            CalcError::DivisionByZero.to_string(),
            "Cannot divide by zero"
        );
        assert_eq!(
            CalcError::CalculationFailed.to_string(),
            "Calculation failed"
        );
    }

    #[test]
    fn test_error_codes_are_distinct() {
        let codes = [
            CalcError::InvalidNumber.code(),
            CalcError::InvalidOperation.code(),
            CalcError::DivisionByZero.code(),
            CalcError::CalculationFailed.code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(CalcError::DivisionByZero, CalcError::DivisionByZero);
        assert_ne!(CalcError::DivisionByZero, CalcError::CalculationFailed);
    }
}
