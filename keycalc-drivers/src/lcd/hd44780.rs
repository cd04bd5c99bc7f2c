//! HD44780 character LCD, 4-bit parallel interface
//!
//! Write-only wiring (R/W tied to ground): RS, E and D4-D7. Every byte is
//! sent as two nibbles, high nibble first, each latched on the falling edge
//! of E. Busy flag cannot be read, so each command waits its worst-case
//! execution time instead.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use keycalc_core::traits::{DisplayError, DisplaySink};

// Commands
const CMD_CLEAR: u8 = 0x01;
const CMD_ENTRY_MODE_INCREMENT: u8 = 0x06;
const CMD_DISPLAY_ON: u8 = 0x0C;
const CMD_FUNCTION_4BIT_2LINE: u8 = 0x28;
const CMD_SET_DDRAM: u8 = 0x80;

/// DDRAM address of the first cell of each row
const ROW_OFFSETS: [u8; 4] = [0x00, 0x40, 0x14, 0x54];

/// Longest row the controller's DDRAM holds
const MAX_COLS: u8 = 40;

/// Execution time of clear/home (µs)
const SLOW_COMMAND_US: u32 = 2000;
/// Execution time of every other instruction (µs)
const FAST_COMMAND_US: u32 = 50;

/// Control and data pins
pub struct Hd44780Pins<P> {
    pub rs: P,
    pub en: P,
    pub d4: P,
    pub d5: P,
    pub d6: P,
    pub d7: P,
}

/// HD44780 driver
pub struct Hd44780<P, D> {
    pins: Hd44780Pins<P>,
    delay: D,
    cols: u8,
    rows: u8,
}

impl<P: OutputPin, D: DelayNs> Hd44780<P, D> {
    /// Run the 4-bit initialisation sequence and clear the display
    ///
    /// # Arguments
    /// - `cols`, `rows`: Display geometry in characters (at most 40x4)
    pub fn new(pins: Hd44780Pins<P>, delay: D, cols: u8, rows: u8) -> Result<Self, DisplayError> {
        if rows == 0 || rows as usize > ROW_OFFSETS.len() || cols == 0 || cols > MAX_COLS {
            return Err(DisplayError::InvalidCoordinates);
        }

        let mut lcd = Self {
            pins,
            delay,
            cols,
            rows,
        };
        lcd.init()?;
        Ok(lcd)
    }

    fn init(&mut self) -> Result<(), DisplayError> {
        // Power-on wait
        self.delay.delay_ms(50);
        set(&mut self.pins.rs, false)?;
        set(&mut self.pins.en, false)?;

        // Force 8-bit mode three times, then switch to 4-bit
        self.write_nibble(0x03)?;
        self.delay.delay_us(4500);
        self.write_nibble(0x03)?;
        self.delay.delay_us(4500);
        self.write_nibble(0x03)?;
        self.delay.delay_us(150);
        self.write_nibble(0x02)?;
        self.delay.delay_us(FAST_COMMAND_US);

        self.command(CMD_FUNCTION_4BIT_2LINE)?;
        self.command(CMD_DISPLAY_ON)?;
        self.command(CMD_CLEAR)?;
        self.command(CMD_ENTRY_MODE_INCREMENT)
    }

    /// Move the cursor to a cell
    pub fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), DisplayError> {
        if row >= self.rows || col >= self.cols {
            return Err(DisplayError::InvalidCoordinates);
        }
        self.command(CMD_SET_DDRAM | (ROW_OFFSETS[row as usize] + col))
    }

    /// Send an instruction byte
    pub fn command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        set(&mut self.pins.rs, false)?;
        self.write_byte(cmd)?;
        let wait = if cmd == CMD_CLEAR || cmd == 0x02 {
            SLOW_COMMAND_US
        } else {
            FAST_COMMAND_US
        };
        self.delay.delay_us(wait);
        Ok(())
    }

    /// Send a character byte to DDRAM
    pub fn data(&mut self, byte: u8) -> Result<(), DisplayError> {
        set(&mut self.pins.rs, true)?;
        self.write_byte(byte)?;
        self.delay.delay_us(FAST_COMMAND_US);
        Ok(())
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), DisplayError> {
        self.write_nibble(byte >> 4)?;
        self.write_nibble(byte & 0x0F)
    }

    fn write_nibble(&mut self, nibble: u8) -> Result<(), DisplayError> {
        set(&mut self.pins.d4, nibble & 0x01 != 0)?;
        set(&mut self.pins.d5, nibble & 0x02 != 0)?;
        set(&mut self.pins.d6, nibble & 0x04 != 0)?;
        set(&mut self.pins.d7, nibble & 0x08 != 0)?;

        // Latch on the falling edge of E
        set(&mut self.pins.en, true)?;
        self.delay.delay_us(1);
        set(&mut self.pins.en, false)?;
        self.delay.delay_us(1);
        Ok(())
    }

    /// Release the pins and delay
    pub fn release(self) -> (Hd44780Pins<P>, D) {
        (self.pins, self.delay)
    }
}

fn set<P: OutputPin>(pin: &mut P, high: bool) -> Result<(), DisplayError> {
    let result = if high { pin.set_high() } else { pin.set_low() };
    result.map_err(|_| DisplayError::Communication)
}

impl<P: OutputPin, D: DelayNs> DisplaySink for Hd44780<P, D> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.command(CMD_CLEAR)
    }

    fn write_at(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        if !text.is_ascii() {
            return Err(DisplayError::InvalidText);
        }
        self.set_cursor(row, col)?;

        let room = (self.cols - col) as usize;
        for &byte in text.as_bytes().iter().take(room) {
            self.data(byte)?;
        }
        Ok(())
    }

    fn dimensions(&self) -> (u8, u8) {
        (self.cols, self.rows)
    }
}
