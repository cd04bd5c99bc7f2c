//! 4x4 matrix keypad scanner
//!
//! Columns are outputs idling high; rows are inputs with pull-ups. A key
//! press connects its row to its column, so driving one column low and
//! reading a row low identifies the key.
//!
//! ```text
//!          C0   C1   C2   C3      (outputs, idle high)
//!     R0 ──┼────┼────┼────┼──     (inputs, pulled up)
//!     R1 ──┼────┼────┼────┼──
//!     R2 ──┼────┼────┼────┼──
//!     R3 ──┼────┼────┼────┼──
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use keycalc_core::config::TimingConfig;
use keycalc_core::input::{KeyMap, KEYPAD_COLS, KEYPAD_ROWS};
use keycalc_core::traits::{Keypad, KeypadError};

/// Poll interval while waiting for a key to be released (ms)
const RELEASE_POLL_MS: u32 = 1;

/// Matrix keypad scanner
///
/// Scanning blocks while a key is held: a press is reported only once the
/// key has been released.
pub struct MatrixKeypad<R, C, D> {
    rows: [R; KEYPAD_ROWS],
    cols: [C; KEYPAD_COLS],
    delay: D,
    keymap: KeyMap,
    settle_us: u32,
    debounce_ms: u32,
}

impl<R, C, D> MatrixKeypad<R, C, D>
where
    R: InputPin,
    C: OutputPin,
    D: DelayNs,
{
    /// Create a new keypad scanner
    ///
    /// Drives every column high (idle).
    pub fn new(
        rows: [R; KEYPAD_ROWS],
        cols: [C; KEYPAD_COLS],
        delay: D,
        keymap: KeyMap,
        timing: &TimingConfig,
    ) -> Result<Self, KeypadError> {
        let mut keypad = Self {
            rows,
            cols,
            delay,
            keymap,
            settle_us: timing.key_settle_us,
            debounce_ms: timing.key_debounce_ms,
        };
        for col in keypad.cols.iter_mut() {
            col.set_high().map_err(|_| KeypadError::Pin)?;
        }
        Ok(keypad)
    }

    /// Scan the matrix once
    ///
    /// Returns the `(row, col)` of the first pressed key found, after it
    /// has been debounced and released.
    pub fn scan(&mut self) -> Result<Option<(usize, usize)>, KeypadError> {
        for col in 0..KEYPAD_COLS {
            self.cols[col].set_low().map_err(|_| KeypadError::Pin)?;
            let hit = self.scan_column();
            // Restore the column even if a row read failed
            self.cols[col].set_high().map_err(|_| KeypadError::Pin)?;

            if let Some(row) = hit? {
                return Ok(Some((row, col)));
            }
        }
        Ok(None)
    }

    /// Read every row with the current column driven low
    fn scan_column(&mut self) -> Result<Option<usize>, KeypadError> {
        self.delay.delay_us(self.settle_us);

        for row in 0..KEYPAD_ROWS {
            if self.rows[row].is_low().map_err(|_| KeypadError::Pin)? {
                self.delay.delay_ms(self.debounce_ms);
                while self.rows[row].is_low().map_err(|_| KeypadError::Pin)? {
                    self.delay.delay_ms(RELEASE_POLL_MS);
                }
                return Ok(Some(row));
            }
        }
        Ok(None)
    }

    /// Release the pins and delay
    pub fn release(self) -> ([R; KEYPAD_ROWS], [C; KEYPAD_COLS], D) {
        (self.rows, self.cols, self.delay)
    }
}

impl<R, C, D> Keypad for MatrixKeypad<R, C, D>
where
    R: InputPin,
    C: OutputPin,
    D: DelayNs,
{
    fn poll(&mut self) -> Result<Option<char>, KeypadError> {
        Ok(self
            .scan()?
            .and_then(|(row, col)| self.keymap.label(row, col)))
    }
}
