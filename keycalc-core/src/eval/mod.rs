//! Infix expression evaluation
//!
//! Precedence climbing over two bounded stacks (pending operands and
//! pending operators). Supports non-negative decimal numbers and the four
//! binary operators `+ - * /`; anything else is rejected.
//!
//! ```text
//!  "3+4*2" ──► scanner ──► operand stack   [3, 4, 2]
//!                     └──► operator stack  [+, *]
//!                                  │ drain
//!                                  ▼
//!                                 11.0
//! ```

pub mod apply;
pub mod engine;
pub mod error;
pub mod operator;
pub mod scanner;
pub mod stack;

pub use apply::{apply, apply_symbol};
pub use engine::{evaluate, Evaluator, DEFAULT_STACK_CAPACITY, MIN_STACK_CAPACITY};
pub use error::EvalError;
pub use operator::{precedence, Operator};
pub use scanner::scan_number;
pub use stack::{BoundedStack, DualStack};
