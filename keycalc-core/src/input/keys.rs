//! Calculator keys and the keypad label map

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::eval::Operator;

/// Keypad matrix rows
pub const KEYPAD_ROWS: usize = 4;

/// Keypad matrix columns
pub const KEYPAD_COLS: usize = 4;

/// A decoded calculator key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    /// Decimal digit 0-9
    Digit(u8),
    /// Decimal point
    Point,
    /// Binary operator
    Operator(Operator),
    /// Discard the entry buffer
    Clear,
}

impl Key {
    /// Character appended to the entry buffer, if any
    pub fn as_char(self) -> Option<char> {
        match self {
            Key::Digit(d) => char::from_digit(u32::from(d), 10),
            Key::Point => Some('.'),
            Key::Operator(op) => Some(op.symbol()),
            Key::Clear => None,
        }
    }
}

/// Physical keypad layout and the meaning of each label
///
/// Digit labels always decode to digits. The four operator labels decode in
/// `+ - * /` order; the point and clear labels are configurable because the
/// stock 4x4 membrane keypad has no `.` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeyMap {
    /// Label printed on each key, indexed `[row][col]`
    pub labels: [[char; KEYPAD_COLS]; KEYPAD_ROWS],
    /// Labels for `+`, `-`, `*`, `/`
    pub operators: [char; 4],
    /// Label that enters a decimal point
    pub point: char,
    /// Label that clears the entry
    pub clear: char,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            labels: [
                ['1', '2', '3', 'A'],
                ['4', '5', '6', 'B'],
                ['7', '8', '9', 'C'],
                ['*', '0', '#', 'D'],
            ],
            operators: ['A', 'B', 'C', 'D'],
            point: '*',
            clear: '#',
        }
    }
}

const OPERATOR_ORDER: [Operator; 4] = [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div];

impl KeyMap {
    /// Label at a matrix position
    pub fn label(&self, row: usize, col: usize) -> Option<char> {
        self.labels.get(row)?.get(col).copied()
    }

    /// Decode a raw label into a key
    ///
    /// Returns `None` for labels with no meaning in this map.
    pub fn decode(&self, label: char) -> Option<Key> {
        if let Some(digit) = label.to_digit(10) {
            return Some(Key::Digit(digit as u8));
        }
        if label == self.clear {
            return Some(Key::Clear);
        }
        if label == self.point {
            return Some(Key::Point);
        }
        self.operators
            .iter()
            .position(|&l| l == label)
            .map(|i| Key::Operator(OPERATOR_ORDER[i]))
    }

    /// Check that every special label is on the keypad and none are shared
    pub fn is_consistent(&self) -> bool {
        let on_pad = |c: char| self.labels.iter().flatten().any(|&l| l == c);

        let mut specials = [' '; 6];
        specials[..4].copy_from_slice(&self.operators);
        specials[4] = self.point;
        specials[5] = self.clear;

        specials.iter().enumerate().all(|(i, &c)| {
            !c.is_ascii_digit() && on_pad(c) && !specials[i + 1..].contains(&c)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let map = KeyMap::default();
        assert_eq!(map.label(0, 0), Some('1'));
        assert_eq!(map.label(3, 2), Some('#'));
        assert_eq!(map.label(4, 0), None);
        assert!(map.is_consistent());
    }

    #[test]
    fn test_decode_default() {
        let map = KeyMap::default();
        assert_eq!(map.decode('7'), Some(Key::Digit(7)));
        assert_eq!(map.decode('A'), Some(Key::Operator(Operator::Add)));
        assert_eq!(map.decode('B'), Some(Key::Operator(Operator::Sub)));
        assert_eq!(map.decode('C'), Some(Key::Operator(Operator::Mul)));
        assert_eq!(map.decode('D'), Some(Key::Operator(Operator::Div)));
        assert_eq!(map.decode('*'), Some(Key::Point));
        assert_eq!(map.decode('#'), Some(Key::Clear));
        assert_eq!(map.decode('Z'), None);
    }

    #[test]
    fn test_key_chars() {
        assert_eq!(Key::Digit(0).as_char(), Some('0'));
        assert_eq!(Key::Point.as_char(), Some('.'));
        assert_eq!(Key::Operator(Operator::Div).as_char(), Some('/'));
        assert_eq!(Key::Clear.as_char(), None);
    }

    #[test]
    fn test_inconsistent_maps() {
        let mut map = KeyMap::default();
        map.clear = map.point;
        assert!(!map.is_consistent());

        let mut map = KeyMap::default();
        map.point = 'X';
        assert!(!map.is_consistent());
    }
}
