//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod button;
pub mod controller;
pub mod indicator;
pub mod keypad;

pub use button::{button_task, BoardButton};
pub use controller::{controller_task, BoardCalculator, BoardDisplay};
pub use indicator::indicator_task;
pub use keypad::{keypad_task, BoardKeypad};
