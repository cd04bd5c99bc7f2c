//! Configuration type definitions
//!
//! These types represent the calculator configuration. The firmware embeds
//! a `calc.toml` that is parsed into [`CalcConfig`] at boot; anything not
//! specified keeps the defaults below, which match the stock keypad, a 16x2
//! LCD and the original timing.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::input::KeyMap;

/// Character display geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Characters per row
    pub cols: u8,
    /// Number of rows
    pub rows: u8,
    /// Row showing the expression being typed
    pub entry_row: u8,
    /// Row showing the result or error
    pub result_row: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            cols: 16,
            rows: 2,
            entry_row: 0,
            result_row: 1,
        }
    }
}

/// Input and indicator timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimingConfig {
    /// Settle time after driving a keypad column (µs)
    pub key_settle_us: u32,
    /// Debounce wait after a key is seen pressed (ms)
    pub key_debounce_ms: u32,
    /// Delay before confirming a compute button press (ms)
    pub button_debounce_ms: u32,
    /// Interval between keypad scans (ms)
    pub poll_interval_ms: u32,
    /// How long the success/error LED stays lit (ms)
    pub indicator_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            key_settle_us: 10,
            key_debounce_ms: 50,
            button_debounce_ms: 20,
            poll_interval_ms: 50,
            indicator_ms: 1000,
        }
    }
}

/// Complete calculator configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalcConfig {
    pub keymap: KeyMap,
    pub display: DisplayConfig,
    pub timing: TimingConfig,
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Operator, point or clear label missing from the keypad or used twice
    InconsistentKeyMap,
    /// Entry or result row outside the display, or both on the same row
    InvalidDisplayRows,
    /// Display too narrow to show a result
    DisplayTooNarrow,
    /// More columns than an HD44780 row holds
    DisplayTooWide,
}

/// Narrowest display that still fits "Err" and short results
pub const MIN_DISPLAY_COLS: u8 = 8;

/// Widest supported display (HD44780 row length)
pub const MAX_DISPLAY_COLS: u8 = 40;

/// Most rows an HD44780 addresses
pub const MAX_DISPLAY_ROWS: u8 = 4;

impl CalcConfig {
    /// Check cross-field consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.keymap.is_consistent() {
            return Err(ConfigError::InconsistentKeyMap);
        }

        let d = &self.display;
        if d.rows > MAX_DISPLAY_ROWS {
            return Err(ConfigError::InvalidDisplayRows);
        }
        if d.entry_row >= d.rows || d.result_row >= d.rows || d.entry_row == d.result_row {
            return Err(ConfigError::InvalidDisplayRows);
        }
        if d.cols < MIN_DISPLAY_COLS {
            return Err(ConfigError::DisplayTooNarrow);
        }
        if d.cols > MAX_DISPLAY_COLS {
            return Err(ConfigError::DisplayTooWide);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = CalcConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.display.cols, 16);
        assert_eq!(config.timing.indicator_ms, 1000);
    }

    #[test]
    fn test_rows_must_differ() {
        let mut config = CalcConfig::default();
        config.display.result_row = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidDisplayRows));
    }

    #[test]
    fn test_row_outside_display() {
        let mut config = CalcConfig::default();
        config.display.result_row = 2;
        assert_eq!(config.validate(), Err(ConfigError::InvalidDisplayRows));
    }

    #[test]
    fn test_narrow_display() {
        let mut config = CalcConfig::default();
        config.display.cols = 4;
        assert_eq!(config.validate(), Err(ConfigError::DisplayTooNarrow));
    }

    #[test]
    fn test_display_size_limits() {
        let mut config = CalcConfig::default();
        config.display.cols = MAX_DISPLAY_COLS;
        assert_eq!(config.validate(), Ok(()));
        config.display.cols = MAX_DISPLAY_COLS + 1;
        assert_eq!(config.validate(), Err(ConfigError::DisplayTooWide));
        config.display.cols = 200;
        assert_eq!(config.validate(), Err(ConfigError::DisplayTooWide));

        let mut config = CalcConfig::default();
        config.display.rows = MAX_DISPLAY_ROWS;
        assert_eq!(config.validate(), Ok(()));
        config.display.rows = MAX_DISPLAY_ROWS + 1;
        assert_eq!(config.validate(), Err(ConfigError::InvalidDisplayRows));
    }
}
