//! Board-agnostic core logic for the keypad calculator firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Fixed-capacity infix expression evaluator
//! - Fixed three-decimal result formatting
//! - Keypad key model and entry session state machine
//! - Button debounce edge detection
//! - Configuration type definitions and parsing
//! - Hardware abstraction traits (keypad, button, display)
//!
//! Nothing in this crate allocates; every buffer has a compile-time capacity.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod eval;
pub mod format;
pub mod input;
pub mod session;
pub mod traits;

pub use eval::{evaluate, EvalError, Evaluator, Operator};
pub use format::{format_fixed3, FormatError};
