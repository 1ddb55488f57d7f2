// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_calculator::prelude::*;
use std::sync::Arc;

fn main() {
    #[cfg(feature = "logging")]
    if let Err(e) = decimal_calculator::logging::init("debug") {
        eprintln!("Failed to initialise logging: {}", e);
    }

    println!("=== Decimal Calculator Example ===\n");

    let calculator = Calculator::new(DecimalContext::default(), Arc::new(LoggingEventHandler));

    let requests = [
        ("10", "5", "divide"),
        ("2.1", "3.2", "add"),
        ("1", "3", "divide"),
        ("1.5e3", "-0.25", "multiply"),
        ("10", "0", "divide"),
        ("abc", "5", "add"),
        ("10", "5", "modulo"),
    ];

    for (num1, num2, op) in requests {
        match calculator.calculate(Some(num1), Some(num2), op) {
            Ok(calc) => println!(
                "{} {} {} = {}",
                num1,
                calc.operation.symbol(),
                num2,
                calc.formatted
            ),
            Err(error) => println!("{} {} {} -> error: {}", num1, op, num2, error),
        }
    }

    // Narrower display for currency-style output
    let cents = DecimalContext::default().with_display_scale(2);
    let value = evaluate(
        parse_operand(Some("19.99")).unwrap_or_default(),
        parse_operand(Some("3")).unwrap_or_default(),
        Operation::Divide,
        &cents,
    );
    match value {
        Ok(v) => println!("\n19.99 / 3 shown to cents: {}", format_result(v, &cents)),
        Err(error) => println!("\n19.99 / 3 failed: {}", error),
    }
}
