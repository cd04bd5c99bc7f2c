//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in keycalc-core on top of `embedded-hal` 1.0 pins and delays:
//!
//! - 4x4 matrix keypad scanner
//! - Debounced compute button
//! - HD44780 character LCD in 4-bit mode

#![no_std]
#![deny(unsafe_code)]

pub mod button;
pub mod keypad;
pub mod lcd;

pub use button::DebouncedButton;
pub use keypad::MatrixKeypad;
pub use lcd::Hd44780;
