//! Entry session
//!
//! Everything that persists between evaluations: the expression being
//! typed, the legality flags, and the screen it is echoed to.

pub mod calculator;
pub mod entry;

pub use calculator::Calculator;
pub use entry::{CalcError, Computation, KeyResponse, Session, ENTRY_CAPACITY};
