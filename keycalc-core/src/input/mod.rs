//! Keypad and button input handling
//!
//! Decoding raw keypad labels into calculator keys, and edge detection for
//! the debounced compute button.

pub mod debounce;
pub mod keys;

pub use debounce::{detect_edge, DebounceState};
pub use keys::{Key, KeyMap, KEYPAD_COLS, KEYPAD_ROWS};
