// ============================================================================
// Numeric Module
// Decimal parsing, formatting, and error classification
// ============================================================================
//
// This module provides:
// - DecimalContext: explicit precision/rounding settings
// - parse_operand: text -> exact Decimal
// - format_result: Decimal -> display string
// - CalcError: error kinds for every failure in the core
//
// Design principles:
// - No floating-point operations
// - Every fallible step returns Result (no panics)
// - No global numeric state; the context is passed explicitly

mod context;
mod errors;
mod formatter;
mod parser;

pub use context::{DecimalContext, MAX_DISPLAY_SCALE, MAX_PRECISION};
pub use errors::{CalcError, CalcResult};
pub use formatter::format_result;
pub use parser::parse_operand;
