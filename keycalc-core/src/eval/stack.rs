//! Bounded stacks used by the evaluator
//!
//! Both stacks have a compile-time capacity. Pushing past capacity is an
//! error and leaves the stack unchanged; popping from an empty stack
//! returns `None`.

use heapless::Vec;

use super::error::EvalError;
use super::operator::Operator;

/// Fixed-capacity LIFO stack
#[derive(Debug, Clone)]
pub struct BoundedStack<T, const N: usize> {
    items: Vec<T, N>,
}

impl<T: Copy, const N: usize> Default for BoundedStack<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy, const N: usize> BoundedStack<T, N> {
    /// Create an empty stack
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Push a value, handing it back if the stack is full
    pub fn push(&mut self, value: T) -> Result<(), T> {
        self.items.push(value)
    }

    /// Pop the top value
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Copy of the top value
    pub fn peek(&self) -> Option<T> {
        self.items.last().copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Discard all values
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

/// Operand and operator stacks of equal capacity
#[derive(Debug, Clone, Default)]
pub struct DualStack<const N: usize> {
    operands: BoundedStack<f64, N>,
    operators: BoundedStack<Operator, N>,
}

impl<const N: usize> DualStack<N> {
    /// Create a pair of empty stacks
    pub const fn new() -> Self {
        Self {
            operands: BoundedStack::new(),
            operators: BoundedStack::new(),
        }
    }

    pub fn push_operand(&mut self, value: f64) -> Result<(), EvalError> {
        self.operands
            .push(value)
            .map_err(|_| EvalError::OperandStackOverflow)
    }

    pub fn pop_operand(&mut self) -> Option<f64> {
        self.operands.pop()
    }

    pub fn push_operator(&mut self, op: Operator) -> Result<(), EvalError> {
        self.operators
            .push(op)
            .map_err(|_| EvalError::OperatorStackOverflow)
    }

    pub fn pop_operator(&mut self) -> Option<Operator> {
        self.operators.pop()
    }

    pub fn peek_operator(&self) -> Option<Operator> {
        self.operators.peek()
    }

    /// Number of pending operands
    pub fn operand_count(&self) -> usize {
        self.operands.len()
    }

    /// Number of pending operators
    pub fn operator_count(&self) -> usize {
        self.operators.len()
    }

    /// Pop the two most recent operands as `(a, b)` where `b` was on top
    ///
    /// Leaves the stack untouched when fewer than two operands are pending.
    pub fn pop_operand_pair(&mut self) -> Result<(f64, f64), EvalError> {
        if self.operands.len() < 2 {
            return Err(EvalError::OperandUnderflow);
        }
        let b = self.operands.pop().ok_or(EvalError::OperandUnderflow)?;
        let a = self.operands.pop().ok_or(EvalError::OperandUnderflow)?;
        Ok((a, b))
    }
}
