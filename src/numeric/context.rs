// ============================================================================
// Decimal Context
// Precision and rounding settings shared by the evaluator and the formatter
// ============================================================================

use rust_decimal::RoundingStrategy;

/// Largest number of significant digits the decimal mantissa can always hold.
pub const MAX_PRECISION: u32 = 28;

/// Largest fractional scale supported by `rust_decimal`.
pub const MAX_DISPLAY_SCALE: u32 = 28;

/// Numeric settings for a calculation.
///
/// There is no process-wide decimal state: every evaluation and every
/// formatted result receives one of these explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalContext {
    /// Significant digits results are rounded to
    pub precision: u32,

    /// Maximum fractional digits shown in a formatted result
    pub display_scale: u32,

    /// Rounding applied both to results and to display
    pub rounding: RoundingStrategy,
}

impl DecimalContext {
    pub const DEFAULT_PRECISION: u32 = 28;
    pub const DEFAULT_DISPLAY_SCALE: u32 = 10;

    /// Create a context with explicit precision and display scale, using
    /// banker's rounding.
    pub fn new(precision: u32, display_scale: u32) -> Self {
        Self {
            precision,
            display_scale,
            rounding: RoundingStrategy::MidpointNearestEven,
        }
    }

    /// Builder method: Set significant digits for results
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Builder method: Set maximum fractional digits for display
    pub fn with_display_scale(mut self, display_scale: u32) -> Self {
        self.display_scale = display_scale;
        self
    }

    /// Builder method: Set rounding strategy
    pub fn with_rounding(mut self, rounding: RoundingStrategy) -> Self {
        self.rounding = rounding;
        self
    }

    /// Validate the context
    pub fn validate(&self) -> Result<(), String> {
        if self.precision == 0 || self.precision > MAX_PRECISION {
            return Err(format!(
                "Precision must be between 1 and {}, got {}",
                MAX_PRECISION, self.precision
            ));
        }

        if self.display_scale > MAX_DISPLAY_SCALE {
            return Err(format!(
                "Display scale must be at most {}, got {}",
                MAX_DISPLAY_SCALE, self.display_scale
            ));
        }

        Ok(())
    }
}

impl Default for DecimalContext {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PRECISION, Self::DEFAULT_DISPLAY_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context() {
        let ctx = DecimalContext::default();
        assert_eq!(ctx.precision, 28);
        assert_eq!(ctx.display_scale, 10);
        assert_eq!(ctx.rounding, RoundingStrategy::MidpointNearestEven);
        assert!(ctx.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let ctx = DecimalContext::default()
            .with_precision(12)
            .with_display_scale(4)
            .with_rounding(RoundingStrategy::MidpointAwayFromZero);

        assert_eq!(ctx.precision, 12);
        assert_eq!(ctx.display_scale, 4);
        assert_eq!(ctx.rounding, RoundingStrategy::MidpointAwayFromZero);
    }

    #[test]
    fn test_validation() {
        assert!(DecimalContext::default().with_precision(0).validate().is_err());
        assert!(DecimalContext::default()
            .with_precision(29)
            .validate()
            .is_err());
        assert!(DecimalContext::default()
            .with_display_scale(29)
            .validate()
            .is_err());
        assert!(DecimalContext::default()
            .with_display_scale(0)
            .validate()
            .is_ok());
    }
}
