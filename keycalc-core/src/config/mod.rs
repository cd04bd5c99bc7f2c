//! Configuration types and parsing

pub mod toml;
pub mod types;

pub use toml::{parse_config, ParseError};
pub use types::*;
