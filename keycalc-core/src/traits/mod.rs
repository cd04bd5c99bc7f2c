//! Hardware abstraction traits
//!
//! These traits define the interface between the calculator logic
//! and hardware-specific implementations.

pub mod button;
pub mod display;
pub mod keypad;

pub use button::ComputeButton;
pub use display::{DisplayError, DisplaySink};
pub use keypad::{Keypad, KeypadError};
