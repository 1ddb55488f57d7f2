// ============================================================================
// Result Formatter
// Stable, human-readable rendering of decimal results
// ============================================================================

use super::context::DecimalContext;
use rust_decimal::Decimal;

/// Render a result for display.
///
/// The value is rounded to `ctx.display_scale` fractional digits, written in
/// positional notation, and stripped of trailing fractional zeros and of a
/// dangling decimal point. Values that round to zero render as "0".
/// Negative zero also renders as "0", never "-0".
///
/// # Examples
/// - 2.5000 -> "2.5"
/// - 3 -> "3"
/// - 0.1 + 0.2 -> "0.3"
/// - 1/3 -> "0.3333333333"
pub fn format_result(value: Decimal, ctx: &DecimalContext) -> String {
    let rounded = value.round_dp_with_strategy(ctx.display_scale, ctx.rounding);

    // Also covers negative zero, which would otherwise print as "-0"
    if rounded.is_zero() {
        return "0".to_string();
    }

    let rendered = rounded.to_string();
    let trimmed = if rendered.contains('.') {
        rendered.trim_end_matches('0').trim_end_matches('.')
    } else {
        rendered.as_str()
    };

    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
