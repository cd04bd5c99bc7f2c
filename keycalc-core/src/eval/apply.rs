//! Single operator application

use super::error::EvalError;
use super::operator::Operator;

/// Apply `op` to `a` and `b` (`a op b`)
///
/// Division by exactly `0.0` is an error; everything else follows native
/// `f64` arithmetic with no rounding or saturation.
pub fn apply(a: f64, b: f64, op: Operator) -> Result<f64, EvalError> {
    match op {
        Operator::Add => Ok(a + b),
        Operator::Sub => Ok(a - b),
        Operator::Mul => Ok(a * b),
        Operator::Div => {
            if b == 0.0 {
                Err(EvalError::DivisionByZero)
            } else {
                Ok(a / b)
            }
        }
    }
}

/// Apply an operator given by its symbol
pub fn apply_symbol(a: f64, b: f64, op: char) -> Result<f64, EvalError> {
    let op = Operator::from_char(op).ok_or(EvalError::InvalidOperator)?;
    apply(a, b, op)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        assert_eq!(apply(6.0, 2.0, Operator::Add), Ok(8.0));
        assert_eq!(apply(6.0, 2.0, Operator::Sub), Ok(4.0));
        assert_eq!(apply(6.0, 2.0, Operator::Mul), Ok(12.0));
        assert_eq!(apply(6.0, 2.0, Operator::Div), Ok(3.0));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(apply(1.0, 0.0, Operator::Div), Err(EvalError::DivisionByZero));
        assert_eq!(apply(1.0, -0.0, Operator::Div), Err(EvalError::DivisionByZero));
        // Tiny but non-zero divisors are allowed
        assert!(apply(1.0, 1e-300, Operator::Div).is_ok());
    }

    #[test]
    fn test_invalid_symbol() {
        assert_eq!(apply_symbol(1.0, 2.0, '%'), Err(EvalError::InvalidOperator));
        assert_eq!(apply_symbol(1.0, 2.0, '-'), Ok(-1.0));
    }
}
