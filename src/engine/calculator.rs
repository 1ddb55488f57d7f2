// ============================================================================
// Calculator
// Parse -> evaluate -> format pipeline shared by every transport
// ============================================================================

use crate::domain::{Calculation, CalculationOutcome, CalculationRequest, Operation};
use crate::engine::evaluate;
use crate::interfaces::{CalculationEvent, EventHandler, NoOpEventHandler};
use crate::numeric::{format_result, parse_operand, CalcError, DecimalContext};
use chrono::Utc;
use std::sync::Arc;

/// Stateless calculator service.
///
/// Holds only immutable configuration, so one instance can be shared across
/// any number of concurrent requests.
pub struct Calculator {
    /// Precision and rounding for every calculation
    context: DecimalContext,

    /// Observer for completed and rejected calculations
    event_handler: Arc<dyn EventHandler>,
}

impl Calculator {
    /// Create a calculator
    pub fn new(context: DecimalContext, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            context,
            event_handler,
        }
    }

    /// Create a calculator from a context, validating it first
    pub fn from_context(
        context: DecimalContext,
        event_handler: Arc<dyn EventHandler>,
    ) -> Result<Self, String> {
        context.validate()?;
        Ok(Self::new(context, event_handler))
    }

    pub fn context(&self) -> &DecimalContext {
        &self.context
    }

    /// Run one calculation from raw text inputs.
    ///
    /// Operands are checked before the operation name, so a request that is
    /// wrong in both ways reports `InvalidNumber`.
    pub fn calculate(
        &self,
        num1: Option<&str>,
        num2: Option<&str>,
        operation: &str,
    ) -> CalculationOutcome {
        let outcome = self.run(num1, num2, operation);

        let event = match &outcome {
            Ok(calc) => CalculationEvent::Completed {
                operation: calc.operation,
                result: calc.value,
                timestamp: Utc::now(),
            },
            Err(error) => CalculationEvent::Rejected {
                operation: operation.to_string(),
                error: *error,
                timestamp: Utc::now(),
            },
        };
        self.event_handler.on_event(event);

        outcome
    }

    /// Run a calculation described by a request
    pub fn calculate_request(&self, request: &CalculationRequest) -> CalculationOutcome {
        self.calculate(
            request.num1.as_deref(),
            request.num2.as_deref(),
            &request.operation,
        )
    }

    fn run(&self, num1: Option<&str>, num2: Option<&str>, operation: &str) -> CalculationOutcome {
        let a = parse_operand(num1);
        let b = parse_operand(num2);
        let (a, b) = match (a, b) {
            (Ok(a), Ok(b)) => (a, b),
            _ => return Err(CalcError::InvalidNumber),
        };

        let operation: Operation = operation.parse()?;
        let value = evaluate(a, b, operation, &self.context)?;

        Ok(Calculation {
            operation,
            value,
            formatted: format_result(value, &self.context),
        })
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(DecimalContext::default(), Arc::new(NoOpEventHandler))
    }
}
