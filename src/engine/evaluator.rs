// ============================================================================
// Arithmetic Evaluator
// Applies one operation to two decimal operands
// ============================================================================

use crate::domain::Operation;
use crate::numeric::{CalcError, CalcResult, DecimalContext};
use rust_decimal::Decimal;

/// Evaluate `a <op> b`.
///
/// - `Divide` by an exact zero is rejected with `DivisionByZero` before any
///   division is attempted.
/// - Results outside the decimal range are reported as `CalculationFailed`.
/// - Results are rounded to `ctx.precision` significant digits. A result at
///   the edge of the decimal range whose rounded form would not fit is kept
///   as computed.
///
/// # Example
/// ```
/// use decimal_calculator::prelude::*;
/// use rust_decimal::Decimal;
///
/// let ctx = DecimalContext::default();
/// let q = evaluate(Decimal::from(10), Decimal::from(4), Operation::Divide, &ctx).unwrap();
/// assert_eq!(q, Decimal::new(25, 1));
/// ```
pub fn evaluate(
    a: Decimal,
    b: Decimal,
    op: Operation,
    ctx: &DecimalContext,
) -> CalcResult<Decimal> {
    if op == Operation::Divide && b.is_zero() {
        return Err(CalcError::DivisionByZero);
    }

    let raw = match op {
        Operation::Add => a.checked_add(b),
        Operation::Subtract => a.checked_sub(b),
        Operation::Multiply => a.checked_mul(b),
        Operation::Divide => a.checked_div(b),
    }
    .ok_or(CalcError::CalculationFailed)?;

    round_to_precision(raw, ctx)
}

fn round_to_precision(value: Decimal, ctx: &DecimalContext) -> CalcResult<Decimal> {
    if value.is_zero() {
        return Ok(value);
    }

    // Rounding up at the edge of the range (e.g. Decimal::MAX) cannot be
    // represented; the unrounded value is exact, so keep it.
    Ok(value
        .round_sf_with_strategy(ctx.precision, ctx.rounding)
        .unwrap_or(value))
}
