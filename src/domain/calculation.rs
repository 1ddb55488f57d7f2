// ============================================================================
// Calculation Domain Model
// ============================================================================

use super::Operation;
use crate::numeric::CalcResult;
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Raw inputs for one calculation, exactly as a caller supplied them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculationRequest {
    /// First operand text (None when the caller sent nothing)
    pub num1: Option<String>,

    /// Second operand text
    pub num2: Option<String>,

    /// Operation name, e.g. "divide"
    pub operation: String,
}

impl CalculationRequest {
    pub fn new(
        num1: impl Into<String>,
        num2: impl Into<String>,
        operation: impl Into<String>,
    ) -> Self {
        Self {
            num1: Some(num1.into()),
            num2: Some(num2.into()),
            operation: operation.into(),
        }
    }
}

/// A successfully completed calculation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Calculation {
    /// Operation that was applied
    pub operation: Operation,

    /// Exact result, rounded to the context precision
    pub value: Decimal,

    /// Display form of `value`
    pub formatted: String,
}

/// Either a calculation or the reason it could not be completed.
pub type CalculationOutcome = CalcResult<Calculation>;
