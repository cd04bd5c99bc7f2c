//! Evaluation error kinds

use core::fmt;

/// Reasons an expression fails to evaluate
///
/// The first error encountered aborts evaluation; no partial result is
/// ever produced alongside one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EvalError {
    /// Byte at `index` is not a digit, operator, whitespace or valid decimal point
    InvalidCharacter { index: usize },
    /// More pending operands than the stack capacity
    OperandStackOverflow,
    /// More pending operators than the stack capacity
    OperatorStackOverflow,
    /// An operator was applied with fewer than two operands available
    OperandUnderflow,
    /// Divisor was exactly zero
    DivisionByZero,
    /// Operator symbol outside `+ - * /`
    InvalidOperator,
    /// Operand stack did not hold exactly one value after the final drain
    ResultArityMismatch,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::InvalidCharacter { index } => {
                write!(f, "invalid character at position {}", index)
            }
            EvalError::OperandStackOverflow => f.write_str("too many pending operands"),
            EvalError::OperatorStackOverflow => f.write_str("too many pending operators"),
            EvalError::OperandUnderflow => f.write_str("operator is missing an operand"),
            EvalError::DivisionByZero => f.write_str("division by zero"),
            EvalError::InvalidOperator => f.write_str("invalid operator"),
            EvalError::ResultArityMismatch => f.write_str("expression does not reduce to one value"),
        }
    }
}
