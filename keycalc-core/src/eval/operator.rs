//! Binary operators and their precedence levels

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Binary arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Parse an operator from its symbol
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    /// Parse an operator from an ASCII byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        Self::from_char(byte as char)
    }

    /// The operator's symbol
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Binding strength: 2 for `*` and `/`, 1 for `+` and `-`
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Mul | Operator::Div => 2,
            Operator::Add | Operator::Sub => 1,
        }
    }
}

/// Precedence of an arbitrary character
///
/// Returns 0 for anything that is not one of `+ - * /`, which lets callers
/// treat an unrecognized operator as a scan error.
pub fn precedence(op: char) -> u8 {
    Operator::from_char(op).map_or(0, Operator::precedence)
}
