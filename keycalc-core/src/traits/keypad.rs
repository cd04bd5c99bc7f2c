//! Keypad trait

/// Errors that can occur while scanning a keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeypadError {
    /// A row or column pin could not be read or driven
    Pin,
}

/// Source of discrete key presses
pub trait Keypad {
    /// Poll for one key press
    ///
    /// Returns `Ok(Some(label))` for a completed press (pressed and
    /// released), `Ok(None)` if no key is down.
    fn poll(&mut self) -> Result<Option<char>, KeypadError>;
}
