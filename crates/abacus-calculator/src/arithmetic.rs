//! Binary arithmetic for the keypad operators
//!
//! Every result is rounded to a fixed number of decimal places with an
//! epsilon correction, so sums such as `0.1 + 0.2` come out as `0.3`. The
//! correction can itself move values that sit right at the last kept decimal;
//! that behaviour is kept as is.

use crate::config::{DEFAULT_PRECISION, MAX_PRECISION};
use crate::error::{CalculatorError, CalculatorResult};
use abacus_types::Operator;

/// Magnitude from which every `f64` is already an integer.
const INTEGRAL_LIMIT: f64 = 4_503_599_627_370_496.0; // 2^52

/// Apply `op` to `a` and `b`, rounding to the default eight decimal places.
pub fn evaluate(a: f64, b: f64, op: Operator) -> CalculatorResult<f64> {
    evaluate_with_precision(a, b, op, DEFAULT_PRECISION)
}

/// Apply `op` to `a` and `b`, rounding to `precision` decimal places.
///
/// Division by zero yields [`CalculatorError::DivisionByZero`] carrying the
/// unrounded dividend.
pub fn evaluate_with_precision(
    a: f64,
    b: f64,
    op: Operator,
    precision: u32,
) -> CalculatorResult<f64> {
    let raw = match op {
        Operator::Add => a + b,
        Operator::Subtract => a - b,
        Operator::Multiply => a * b,
        Operator::Divide => {
            if b == 0.0 {
                return Err(CalculatorError::DivisionByZero { dividend: a });
            }
            a / b
        }
    };

    Ok(round_to_precision(raw, precision))
}

/// `round((value + ε) × 10^precision) / 10^precision`
///
/// `precision` is capped at [`MAX_PRECISION`].
pub fn round_to_precision(value: f64, precision: u32) -> f64 {
    let scale = 10f64.powi(precision.min(MAX_PRECISION) as i32);
    round_half_up((value + f64::EPSILON) * scale) / scale
}

/// Round to the nearest integer, ties toward positive infinity.
fn round_half_up(value: f64) -> f64 {
    if !value.is_finite() || value.abs() >= INTEGRAL_LIMIT {
        return value;
    }
    (value + 0.5).floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_operations() {
        assert_eq!(evaluate(3.0, 4.0, Operator::Add), Ok(7.0));
        assert_eq!(evaluate(3.0, 4.0, Operator::Subtract), Ok(-1.0));
        assert_eq!(evaluate(7.0, 2.0, Operator::Multiply), Ok(14.0));
        assert_eq!(evaluate(7.0, 2.0, Operator::Divide), Ok(3.5));
    }

    #[test]
    fn floating_point_artifacts_are_rounded_away() {
        assert_eq!(evaluate(0.1, 0.2, Operator::Add), Ok(0.3));
        assert_eq!(evaluate(1.1, 1.1, Operator::Multiply), Ok(1.21));
        assert_eq!(evaluate(1.0, 3.0, Operator::Divide), Ok(0.33333333));
    }

    #[test]
    fn divide_by_zero_reports_dividend() {
        assert_eq!(
            evaluate(5.0, 0.0, Operator::Divide),
            Err(CalculatorError::DivisionByZero { dividend: 5.0 })
        );
        assert_eq!(
            evaluate(5.0, -0.0, Operator::Divide),
            Err(CalculatorError::DivisionByZero { dividend: 5.0 })
        );
    }

    #[test]
    fn rounding_ties_go_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_to_precision(0.125, 2), 0.13);
    }

    #[test]
    fn large_and_non_finite_values_pass_through() {
        assert_eq!(round_to_precision(f64::INFINITY, 8), f64::INFINITY);
        let sum = evaluate(1e20, 1e20, Operator::Add).unwrap();
        assert!(((sum - 2e20) / 2e20).abs() < 1e-12);
        assert!(evaluate(f64::INFINITY, 0.0, Operator::Multiply).unwrap().is_nan());
    }

    #[test]
    fn precision_is_configurable() {
        assert_eq!(evaluate_with_precision(2.0, 3.0, Operator::Divide, 2), Ok(0.67));
        assert_eq!(evaluate_with_precision(2.0, 3.0, Operator::Divide, 0), Ok(1.0));
    }

    #[test]
    fn oversized_precision_is_capped() {
        assert_eq!(evaluate_with_precision(1.0, 1.0, Operator::Add, 400), Ok(2.0));
        assert_eq!(evaluate_with_precision(1.0, 1.0, Operator::Add, u32::MAX), Ok(2.0));
        assert_eq!(
            evaluate_with_precision(0.1, 0.2, Operator::Add, 400),
            evaluate_with_precision(0.1, 0.2, Operator::Add, MAX_PRECISION)
        );
    }
}
