//! Push button implementations

pub mod debounced;

pub use debounced::DebouncedButton;
