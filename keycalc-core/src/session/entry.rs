//! Entry buffer state machine
//!
//! Accumulates key presses into an expression of the form
//! `operand operator operand` and decides which presses are legal:
//!
//! - digits are always accepted while there is room
//! - one decimal point per operand
//! - one operator, and only after something has been typed
//!
//! Evaluation is gated on the second operand having started with a digit
//! (or a point followed by a digit). An evaluation attempt always resets
//! the session, as does an explicit clear.

use heapless::String;

use crate::eval::{evaluate, EvalError};
use crate::format::{format_fixed3, Fixed3, FormatError};
use crate::input::Key;

/// Entry buffer capacity in bytes; one byte is kept free so at most
/// `ENTRY_CAPACITY - 1` characters are accepted
pub const ENTRY_CAPACITY: usize = 32;

/// Outcome of a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyResponse {
    /// Character appended to the buffer
    Appended,
    /// Buffer and flags reset
    Cleared,
    /// Press not legal in the current state, or the buffer is full
    Ignored,
}

/// Why a computation produced no value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalcError {
    Eval(EvalError),
    Format(FormatError),
}

impl From<EvalError> for CalcError {
    fn from(e: EvalError) -> Self {
        CalcError::Eval(e)
    }
}

impl From<FormatError> for CalcError {
    fn from(e: FormatError) -> Self {
        CalcError::Format(e)
    }
}

/// Result of evaluating the entry buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Computation {
    /// Formatted result
    Value(Fixed3),
    /// Evaluation or formatting failed
    Error(CalcError),
}

impl Computation {
    pub fn is_ok(&self) -> bool {
        matches!(self, Computation::Value(_))
    }

    /// Text shown for this outcome
    pub fn text(&self) -> &str {
        match self {
            Computation::Value(s) => s.as_str(),
            Computation::Error(_) => "Err",
        }
    }
}

/// Persistent entry state between evaluations
#[derive(Debug, Clone, Default)]
pub struct Session<const N: usize = ENTRY_CAPACITY> {
    buffer: String<N>,
    operator_entered: bool,
    decimal_entered: bool,
}

impl<const N: usize> Session<N> {
    /// Create an empty session
    pub const fn new() -> Self {
        Self {
            buffer: String::new(),
            operator_entered: false,
            decimal_entered: false,
        }
    }

    /// Current expression text
    pub fn buffer(&self) -> &str {
        self.buffer.as_str()
    }

    pub fn operator_entered(&self) -> bool {
        self.operator_entered
    }

    pub fn decimal_entered(&self) -> bool {
        self.decimal_entered
    }

    /// Discard the buffer and reset both flags
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.operator_entered = false;
        self.decimal_entered = false;
    }

    /// Process one key press
    pub fn press(&mut self, key: Key) -> KeyResponse {
        match key {
            Key::Clear => {
                self.clear();
                KeyResponse::Cleared
            }
            Key::Digit(_) => self.append(key),
            Key::Point => {
                if self.decimal_entered {
                    return KeyResponse::Ignored;
                }
                let response = self.append(key);
                if response == KeyResponse::Appended {
                    self.decimal_entered = true;
                }
                response
            }
            Key::Operator(_) => {
                if self.buffer.is_empty() || self.operator_entered {
                    return KeyResponse::Ignored;
                }
                let response = self.append(key);
                if response == KeyResponse::Appended {
                    self.operator_entered = true;
                    self.decimal_entered = false;
                }
                response
            }
        }
    }

    fn append(&mut self, key: Key) -> KeyResponse {
        let Some(c) = key.as_char() else {
            return KeyResponse::Ignored;
        };
        if self.buffer.len() >= N.saturating_sub(1) || self.buffer.push(c).is_err() {
            return KeyResponse::Ignored;
        }
        KeyResponse::Appended
    }

    /// Whether the buffer holds a complete `operand operator operand`
    ///
    /// The operator must not be first, and the character after it must be
    /// a digit or a point followed by a digit.
    pub fn ready(&self) -> bool {
        if !self.operator_entered {
            return false;
        }
        let bytes = self.buffer.as_bytes();
        let Some(idx) = bytes.iter().position(|b| matches!(b, b'+' | b'-' | b'*' | b'/')) else {
            return false;
        };
        if idx == 0 || idx + 1 >= bytes.len() {
            return false;
        }
        match (bytes[idx + 1], bytes.get(idx + 2)) {
            (b, _) if b.is_ascii_digit() => true,
            (b'.', Some(b)) => b.is_ascii_digit(),
            _ => false,
        }
    }

    /// Evaluate the buffer if it is ready
    ///
    /// Returns `None` and leaves the session untouched when the expression
    /// is incomplete. Otherwise the session is reset whatever the outcome.
    pub fn compute(&mut self) -> Option<Computation> {
        if !self.ready() {
            return None;
        }
        let outcome = match Self::evaluate_and_format(self.buffer.as_str()) {
            Ok(text) => Computation::Value(text),
            Err(e) => Computation::Error(e),
        };
        self.clear();
        Some(outcome)
    }

    fn evaluate_and_format(expr: &str) -> Result<Fixed3, CalcError> {
        let value = evaluate(expr)?;
        Ok(format_fixed3(value)?)
    }
}
