// ============================================================================
// Decimal Calculator Library
// Two-operand arithmetic over exact decimals, with an optional HTTP front end
// ============================================================================

//! # Decimal Calculator
//!
//! A small calculator that never touches binary floating point.
//!
//! ## Features
//!
//! - **Exact decimal operands** parsed from plain, signed, or exponent notation
//! - **Closed set of operations** (add, subtract, multiply, divide)
//! - **Explicit precision context** instead of process-wide numeric state
//! - **Stable display format**: at most 10 fractional digits, no trailing
//!   zeros, never exponent notation
//! - **HTTP server** (feature `server`): HTML form at `/`, JSON at `/api/calc`
//!
//! ## Example
//!
//! ```rust
//! use decimal_calculator::prelude::*;
//!
//! let calculator = Calculator::default();
//!
//! let calc = calculator.calculate(Some("10"), Some("4"), "divide").unwrap();
//! assert_eq!(calc.formatted, "2.5");
//!
//! let err = calculator.calculate(Some("10"), Some("0"), "divide").unwrap_err();
//! assert_eq!(err, CalcError::DivisionByZero);
//! assert_eq!(err.to_string(), "Cannot divide by zero");
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

#[cfg(feature = "logging")]
pub mod logging;

#[cfg(feature = "server")]
pub mod server;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{Calculation, CalculationOutcome, CalculationRequest, Operation};
    pub use crate::engine::{evaluate, Calculator};
    pub use crate::interfaces::{
        CalculationEvent, EventHandler, LoggingEventHandler, NoOpEventHandler,
    };
    pub use crate::numeric::{format_result, parse_operand, CalcError, CalcResult, DecimalContext};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_evaluate_format_pipeline() {
        let ctx = DecimalContext::default();

        let a = parse_operand(Some("2.5000")).unwrap();
        assert_eq!(format_result(a, &ctx), "2.5");

        let b = parse_operand(Some("3")).unwrap();
        assert_eq!(format_result(b, &ctx), "3");

        let sum = evaluate(a, b, Operation::Add, &ctx).unwrap();
        assert_eq!(format_result(sum, &ctx), "5.5");
    }

    #[test]
    fn test_parse_failures() {
        assert_eq!(parse_operand(Some("")), Err(CalcError::InvalidNumber));
        assert_eq!(parse_operand(Some("abc")), Err(CalcError::InvalidNumber));
        assert_eq!(parse_operand(None), Err(CalcError::InvalidNumber));
        assert_eq!(
            parse_operand(Some("3.1400")),
            Ok(rust_decimal::Decimal::new(314, 2))
        );
    }

    proptest! {
        #[test]
        fn prop_unknown_operation_always_rejected(
            name in "[a-zA-Z_]{0,12}",
            a in -1_000i64..1_000,
            b in -1_000i64..1_000,
        ) {
            prop_assume!(name.parse::<Operation>().is_err());
            let result = Calculator::default().calculate(
                Some(a.to_string().as_str()),
                Some(b.to_string().as_str()),
                &name,
            );
            prop_assert_eq!(result, Err(CalcError::InvalidOperation));
        }

        #[test]
        fn prop_formatted_result_has_no_exponent(
            a in "-?[0-9]{1,9}(\\.[0-9]{1,6})?",
            b in "-?[1-9][0-9]{0,5}(\\.[0-9]{1,6})?",
            op in prop::sample::select(Operation::ALL.to_vec()),
        ) {
            let calc = Calculator::default()
                .calculate(Some(a.as_str()), Some(b.as_str()), op.as_str())
                .unwrap();
            prop_assert!(!calc.formatted.contains(['e', 'E']));
            prop_assert!(!calc.formatted.is_empty());
        }
    }
}
