//! Precedence-climbing evaluation engine
//!
//! The engine walks the input once. Numbers go straight onto the operand
//! stack. An incoming operator first reduces every pending operator whose
//! precedence is greater than or equal to its own, then waits on the
//! operator stack. At end of input the remaining operators are reduced and
//! exactly one operand must be left.
//!
//! Using `>=` for the comparison makes operators of equal precedence
//! left-associative: `10-2-3` is `(10-2)-3`.

use super::apply::apply;
use super::error::EvalError;
use super::operator::Operator;
use super::scanner::scan_number;
use super::stack::DualStack;

/// Stack capacity used by [`evaluate`]
pub const DEFAULT_STACK_CAPACITY: usize = 32;

/// Smallest stack capacity an [`Evaluator`] may be built with
pub const MIN_STACK_CAPACITY: usize = 16;

/// Single-use evaluator with stacks of capacity `N`
///
/// All state lives inside the evaluator and is consumed by
/// [`Evaluator::evaluate`], so nothing carries over between expressions.
#[derive(Debug, Clone)]
pub struct Evaluator<const N: usize = DEFAULT_STACK_CAPACITY> {
    stacks: DualStack<N>,
}

impl<const N: usize> Default for Evaluator<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Evaluator<N> {
    const CAPACITY_CHECK: () = assert!(
        N >= MIN_STACK_CAPACITY,
        "evaluator stack capacity must be at least 16"
    );

    /// Create an evaluator with empty stacks
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::CAPACITY_CHECK;
        Self {
            stacks: DualStack::new(),
        }
    }

    /// Evaluate an infix expression
    ///
    /// Accepts digits, `.`, `+ - * /`, spaces and tabs. The first error
    /// aborts evaluation.
    pub fn evaluate(mut self, expr: &str) -> Result<f64, EvalError> {
        let input = expr.as_bytes();
        let mut pos = 0;

        while pos < input.len() {
            let byte = input[pos];

            if byte == b' ' || byte == b'\t' {
                pos += 1;
                continue;
            }

            if let Some((value, consumed)) = scan_number(input, pos) {
                self.stacks.push_operand(value)?;
                pos += consumed;
            } else if let Some(op) = Operator::from_byte(byte) {
                self.shunt(op)?;
                pos += 1;
            } else {
                return Err(EvalError::InvalidCharacter { index: pos });
            }
        }

        while self.stacks.operator_count() > 0 {
            self.reduce()?;
        }

        match (self.stacks.operand_count(), self.stacks.pop_operand()) {
            (1, Some(result)) => Ok(result),
            _ => Err(EvalError::ResultArityMismatch),
        }
    }

    /// Reduce pending operators that bind at least as tightly as `op`, then push it
    fn shunt(&mut self, op: Operator) -> Result<(), EvalError> {
        while let Some(top) = self.stacks.peek_operator() {
            if top.precedence() < op.precedence() {
                break;
            }
            self.reduce()?;
        }
        self.stacks.push_operator(op)
    }

    /// Apply the top operator to the top two operands and push the result
    fn reduce(&mut self) -> Result<(), EvalError> {
        let (a, b) = self.stacks.pop_operand_pair()?;
        let op = self
            .stacks
            .pop_operator()
            .ok_or(EvalError::InvalidOperator)?;
        let result = apply(a, b, op)?;
        self.stacks.push_operand(result)
    }
}

/// Evaluate an infix expression with the default stack capacity
///
/// # Example
/// ```
/// use keycalc_core::evaluate;
///
/// assert_eq!(evaluate("3+4*2"), Ok(11.0));
/// assert!(evaluate("5/0").is_err());
/// ```
pub fn evaluate(expr: &str) -> Result<f64, EvalError> {
    Evaluator::<DEFAULT_STACK_CAPACITY>::new().evaluate(expr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence() {
        assert_eq!(evaluate("3+4*2"), Ok(11.0));
        assert_eq!(evaluate("2*3+4"), Ok(10.0));
        assert_eq!(evaluate("1+6/3-2"), Ok(1.0));
    }

    #[test]
    fn test_left_associative() {
        assert_eq!(evaluate("10-2-3"), Ok(5.0));
        assert_eq!(evaluate("6/3/2"), Ok(1.0));
        assert_eq!(evaluate("2*3/4"), Ok(1.5));
    }

    #[test]
    fn test_decimals() {
        assert_eq!(evaluate("1.5*4"), Ok(6.0));
        assert_eq!(evaluate(".5+.25"), Ok(0.75));
        assert_eq!(evaluate("7/2"), Ok(3.5));
    }

    #[test]
    fn test_whitespace_is_skipped() {
        assert_eq!(evaluate(" 3 +\t4 * 2 "), Ok(11.0));
    }

    #[test]
    fn test_single_number() {
        assert_eq!(evaluate("42"), Ok(42.0));
    }

    #[test]
    fn test_negative_result() {
        assert_eq!(evaluate("2-5"), Ok(-3.0));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(evaluate("5/0"), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate("5/0.0"), Err(EvalError::DivisionByZero));
        // Divisor reduced to zero before the division runs
        assert_eq!(evaluate("1/2-2"), Ok(-1.5));
        assert_eq!(evaluate("4/0*3"), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_leading_operator() {
        assert_eq!(evaluate("+5"), Err(EvalError::OperandUnderflow));
        assert_eq!(evaluate("*5"), Err(EvalError::OperandUnderflow));
    }

    #[test]
    fn test_trailing_operator() {
        assert_eq!(evaluate("5+"), Err(EvalError::OperandUnderflow));
        assert_eq!(evaluate("5*2-"), Err(EvalError::OperandUnderflow));
    }

    #[test]
    fn test_doubled_operator() {
        assert_eq!(evaluate("5++3"), Err(EvalError::OperandUnderflow));
    }

    #[test]
    fn test_invalid_characters() {
        assert_eq!(
            evaluate("3+(4*2)"),
            Err(EvalError::InvalidCharacter { index: 2 })
        );
        assert_eq!(evaluate("2x3"), Err(EvalError::InvalidCharacter { index: 1 }));
        assert_eq!(evaluate("."), Err(EvalError::InvalidCharacter { index: 0 }));
        assert_eq!(evaluate("3+.+1"), Err(EvalError::InvalidCharacter { index: 2 }));
        assert_eq!(evaluate("3×2"), Err(EvalError::InvalidCharacter { index: 1 }));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(evaluate(""), Err(EvalError::ResultArityMismatch));
        assert_eq!(evaluate("   "), Err(EvalError::ResultArityMismatch));
    }

    #[test]
    fn test_adjacent_numbers() {
        assert_eq!(evaluate("3 4"), Err(EvalError::ResultArityMismatch));
        assert_eq!(evaluate("1.2.3"), Err(EvalError::ResultArityMismatch));
    }

    #[test]
    fn test_operand_stack_exhaustion() {
        let mut expr: heapless::String<128> = heapless::String::new();
        for _ in 0..=DEFAULT_STACK_CAPACITY {
            expr.push_str("1 ").unwrap();
        }
        assert_eq!(evaluate(&expr), Err(EvalError::OperandStackOverflow));
    }

    #[test]
    fn test_long_chain_does_not_grow_stacks() {
        let mut expr: heapless::String<256> = heapless::String::new();
        expr.push('1').unwrap();
        for _ in 0..(DEFAULT_STACK_CAPACITY * 2) {
            expr.push_str("+1").unwrap();
        }
        assert_eq!(evaluate(&expr), Ok((DEFAULT_STACK_CAPACITY * 2 + 1) as f64));
    }

    #[test]
    fn test_minimum_capacity() {
        let mut expr: heapless::String<64> = heapless::String::new();
        for _ in 0..MIN_STACK_CAPACITY {
            expr.push_str("2 ").unwrap();
        }
        assert_eq!(
            Evaluator::<MIN_STACK_CAPACITY>::new().evaluate(&expr),
            Err(EvalError::ResultArityMismatch)
        );
        expr.push('2').unwrap();
        assert_eq!(
            Evaluator::<MIN_STACK_CAPACITY>::new().evaluate(&expr),
            Err(EvalError::OperandStackOverflow)
        );
    }
}
