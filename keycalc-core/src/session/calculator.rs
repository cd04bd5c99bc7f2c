//! Calculator front end
//!
//! Binds a [`Session`] to a display: decodes keypad labels, applies them to
//! the session and keeps the screen in step. The entry row shows the tail
//! of the expression; after a computation the screen is cleared and the
//! result row shows the value or `Err`.

use super::entry::{Computation, KeyResponse, Session, ENTRY_CAPACITY};
use crate::config::{CalcConfig, DisplayConfig};
use crate::input::KeyMap;
use crate::traits::{DisplayError, DisplaySink};

/// Session plus the display it renders to
pub struct Calculator<D, const N: usize = ENTRY_CAPACITY> {
    session: Session<N>,
    display: D,
    layout: DisplayConfig,
    keymap: KeyMap,
}

impl<D: DisplaySink, const N: usize> Calculator<D, N> {
    /// Create a calculator rendering to `display`
    pub fn new(display: D, config: &CalcConfig) -> Self {
        Self {
            session: Session::new(),
            display,
            layout: config.display,
            keymap: config.keymap,
        }
    }

    /// Clear the screen and the session
    pub fn reset(&mut self) -> Result<(), DisplayError> {
        self.session.clear();
        self.display.clear()
    }

    pub fn session(&self) -> &Session<N> {
        &self.session
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Handle a raw keypad label
    ///
    /// Labels the key map does not know are ignored.
    pub fn handle_label(&mut self, label: char) -> Result<KeyResponse, DisplayError> {
        let Some(key) = self.keymap.decode(label) else {
            return Ok(KeyResponse::Ignored);
        };

        let response = self.session.press(key);
        match response {
            KeyResponse::Cleared => self.display.clear()?,
            KeyResponse::Appended => self.show_entry()?,
            KeyResponse::Ignored => {}
        }
        Ok(response)
    }

    /// Handle a compute button press
    ///
    /// Returns `None` when the entry is not ready; nothing changes on screen.
    pub fn handle_compute(&mut self) -> Result<Option<Computation>, DisplayError> {
        let Some(outcome) = self.session.compute() else {
            return Ok(None);
        };
        self.show_outcome(&outcome)?;
        Ok(Some(outcome))
    }

    /// Redraw the entry row, keeping the most recent characters visible
    fn show_entry(&mut self) -> Result<(), DisplayError> {
        let text = self.session.buffer();
        let width = self.layout.cols as usize;
        let start = text.len().saturating_sub(width);
        self.display.write_line(self.layout.entry_row, &text[start..])
    }

    /// Clear the screen and put the value or `Err` on the result row
    fn show_outcome(&mut self, outcome: &Computation) -> Result<(), DisplayError> {
        self.display.clear()?;
        self.display.write_line(self.layout.result_row, outcome.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::EvalError;
    use crate::session::CalcError;
    use heapless::String;

    /// Mock display recording the visible rows
    struct MockDisplay {
        rows: [String<16>; 2],
        clears: usize,
    }

    impl MockDisplay {
        fn new() -> Self {
            Self {
                rows: [String::new(), String::new()],
                clears: 0,
            }
        }

        fn row(&self, row: usize) -> &str {
            self.rows[row].as_str().trim_end()
        }
    }

    impl DisplaySink for MockDisplay {
        fn clear(&mut self) -> Result<(), DisplayError> {
            for row in &mut self.rows {
                row.clear();
            }
            self.clears += 1;
            Ok(())
        }

        fn write_at(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
            if row >= 2 || col != 0 || text.len() > 16 {
                return Err(DisplayError::InvalidCoordinates);
            }
            let line = &mut self.rows[row as usize];
            line.clear();
            line.push_str(text)
                .map_err(|_| DisplayError::InvalidCoordinates)
        }

        fn dimensions(&self) -> (u8, u8) {
            (16, 2)
        }
    }

    fn calculator() -> Calculator<MockDisplay> {
        Calculator::new(MockDisplay::new(), &CalcConfig::default())
    }

    fn press_all(calc: &mut Calculator<MockDisplay>, labels: &str) {
        for label in labels.chars() {
            calc.handle_label(label).unwrap();
        }
    }

    #[test]
    fn test_entry_is_echoed() {
        let mut calc = calculator();
        // '*' is the point key on the stock keypad
        press_all(&mut calc, "12A3*5");
        assert_eq!(calc.display().row(0), "12+3.5");
        assert_eq!(calc.display().row(1), "");
    }

    #[test]
    fn test_compute_shows_result() {
        let mut calc = calculator();
        press_all(&mut calc, "7D2");
        let outcome = calc.handle_compute().unwrap().unwrap();
        assert!(outcome.is_ok());
        assert_eq!(calc.display().row(0), "");
        assert_eq!(calc.display().row(1), "3.500");
        assert_eq!(calc.session().buffer(), "");
    }

    #[test]
    fn test_compute_shows_err() {
        let mut calc = calculator();
        press_all(&mut calc, "5D0");
        let outcome = calc.handle_compute().unwrap().unwrap();
        assert_eq!(
            outcome,
            Computation::Error(CalcError::Eval(EvalError::DivisionByZero))
        );
        assert_eq!(calc.display().row(1), "Err");
    }

    #[test]
    fn test_incomplete_compute_leaves_screen() {
        let mut calc = calculator();
        press_all(&mut calc, "5A");
        assert_eq!(calc.handle_compute().unwrap(), None);
        assert_eq!(calc.display().row(0), "5+");
        assert_eq!(calc.display().clears, 0);
    }

    #[test]
    fn test_clear_key() {
        let mut calc = calculator();
        press_all(&mut calc, "12A");
        assert_eq!(calc.handle_label('#').unwrap(), KeyResponse::Cleared);
        assert_eq!(calc.display().row(0), "");
        assert_eq!(calc.session().buffer(), "");
    }

    #[test]
    fn test_result_stays_while_typing() {
        let mut calc = calculator();
        press_all(&mut calc, "2C3");
        calc.handle_compute().unwrap();
        press_all(&mut calc, "9");
        assert_eq!(calc.display().row(0), "9");
        assert_eq!(calc.display().row(1), "6.000");
    }

    #[test]
    fn test_long_entry_scrolls() {
        let mut calc = calculator();
        press_all(&mut calc, "12345678901234567890");
        assert_eq!(calc.display().row(0), "5678901234567890");
    }

    #[test]
    fn test_unknown_label_ignored() {
        let mut calc = calculator();
        assert_eq!(calc.handle_label('?').unwrap(), KeyResponse::Ignored);
        assert_eq!(calc.display().clears, 0);
    }
}
