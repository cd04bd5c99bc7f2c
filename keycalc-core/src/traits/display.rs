//! Character display trait

/// Errors that can occur with the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with the display controller
    Communication,
    /// Row or column outside the display
    InvalidCoordinates,
    /// Text contains characters the display cannot show
    InvalidText,
}

/// Fixed-width character display
///
/// Row and column are in character cells, both 0-based.
pub trait DisplaySink {
    /// Clear the entire display
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Write text starting at the given cell
    ///
    /// Text running past the end of the row is truncated.
    fn write_at(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError>;

    /// Get the display dimensions
    ///
    /// Returns (columns, rows) in character units
    fn dimensions(&self) -> (u8, u8);

    /// Replace a whole row with `text`, padding the rest with spaces
    fn write_line(&mut self, row: u8, text: &str) -> Result<(), DisplayError> {
        let (cols, _) = self.dimensions();
        if !text.is_ascii() {
            return Err(DisplayError::InvalidText);
        }
        let mut buf = [b' '; u8::MAX as usize];
        let width = cols as usize;
        let bytes = text.as_bytes();
        let len = bytes.len().min(width);
        buf[..len].copy_from_slice(&bytes[..len]);

        let line = core::str::from_utf8(&buf[..width]).map_err(|_| DisplayError::InvalidText)?;
        self.write_at(row, 0, line)
    }
}
