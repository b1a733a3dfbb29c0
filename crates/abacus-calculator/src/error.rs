//! Error types for the calculator engine
//!
//! The engine has exactly one failure mode. It is recoverable: the engine
//! completes its state transition before reporting it, so the caller only has
//! to decide how to present the condition to the user.

use thiserror::Error;

/// Conditions reported by engine operations
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CalculatorError {
    /// A pending division had a zero divisor. The dividend is kept as the result.
    #[error("division by zero (dividend {dividend} kept as result)")]
    DivisionByZero { dividend: f64 },
}

impl CalculatorError {
    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            CalculatorError::DivisionByZero { .. } => "division_by_zero",
        }
    }

    /// Text shown to the user when the condition occurs
    pub fn notice(&self) -> &'static str {
        match self {
            CalculatorError::DivisionByZero { .. } => "Error: Cannot divide by zero!",
        }
    }
}

/// Result type for engine operations
pub type CalculatorResult<T> = Result<T, CalculatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn division_by_zero_describes_itself() {
        let err = CalculatorError::DivisionByZero { dividend: 5.0 };
        assert_eq!(err.category(), "division_by_zero");
        assert_eq!(err.notice(), "Error: Cannot divide by zero!");
        assert!(err.to_string().contains("dividend 5"));
    }
}
