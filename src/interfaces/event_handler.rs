// ============================================================================
// Event Handler Interface
// Defines the contract for observing calculations
// ============================================================================

use crate::domain::Operation;
use crate::numeric::CalcError;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the calculator
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalculationEvent {
    /// Calculation produced a result
    Completed {
        operation: Operation,
        result: Decimal,
        timestamp: DateTime<Utc>,
    },

    /// Calculation was refused; `operation` is the name as received
    Rejected {
        operation: String,
        error: CalcError,
        timestamp: DateTime<Utc>,
    },
}

/// Event handler trait for processing calculator events
/// Implementations can handle logging, metrics, auditing, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a calculation event
    fn on_event(&self, event: CalculationEvent);
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CalculationEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: CalculationEvent) {
        match &event {
            CalculationEvent::Completed {
                operation, result, ..
            } => {
                tracing::debug!(%operation, %result, "Calculation completed");
            }
            CalculationEvent::Rejected {
                operation, error, ..
            } => {
                tracing::debug!(operation = %operation, error = error.code(), "Calculation rejected");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_handler() {
        let handler = NoOpEventHandler;
        handler.on_event(CalculationEvent::Rejected {
            operation: "modulo".to_string(),
            error: CalcError::InvalidOperation,
            timestamp: Utc::now(),
        });
        // Should not panic
    }

    #[test]
    fn test_logging_handler() {
        let handler = LoggingEventHandler;
        handler.on_event(CalculationEvent::Completed {
            operation: Operation::Add,
            result: Decimal::from(5),
            timestamp: Utc::now(),
        });
    }
}
