//! Debounced compute button
//!
//! Active-low push button (input with pull-up, switch to ground). Press
//! edges are detected with [`keycalc_core::input::detect_edge`]; the settle
//! delay between the two readings is the configured button debounce time.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

use keycalc_core::input::{detect_edge, DebounceState};
use keycalc_core::traits::ComputeButton;

/// Debounced, edge-triggered push button
pub struct DebouncedButton<P, D> {
    pin: P,
    delay: D,
    state: DebounceState,
    debounce_ms: u32,
}

impl<P: InputPin, D: DelayNs> DebouncedButton<P, D> {
    /// Create a new button reader
    ///
    /// # Arguments
    /// - `pin`: Input pin, low while the button is held
    /// - `delay`: Delay provider for the settle wait
    /// - `debounce_ms`: Settle time before confirming a press
    pub fn new(pin: P, delay: D, debounce_ms: u32) -> Self {
        Self {
            pin,
            delay,
            state: DebounceState::new(),
            debounce_ms,
        }
    }

    /// Whether a confirmed press is still held
    pub fn is_held(&self) -> bool {
        self.state.is_held()
    }
}

impl<P: InputPin, D: DelayNs> ComputeButton for DebouncedButton<P, D> {
    fn pressed(&mut self) -> bool {
        let Self {
            pin,
            delay,
            state,
            debounce_ms,
        } = self;

        // A pin that cannot be read counts as released
        let read = || pin.is_low().unwrap_or(false);
        let settle = || delay.delay_ms(*debounce_ms);
        detect_edge(state, read, settle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    /// Mock input replaying scripted levels (true = pressed/low)
    struct ScriptedPin {
        levels: &'static [bool],
        pos: usize,
    }

    impl ScriptedPin {
        fn new(levels: &'static [bool]) -> Self {
            Self { levels, pos: 0 }
        }
    }

    impl ErrorType for ScriptedPin {
        type Error = Infallible;
    }

    impl InputPin for ScriptedPin {
        fn is_high(&mut self) -> Result<bool, Infallible> {
            Ok(!self.is_low()?)
        }

        fn is_low(&mut self) -> Result<bool, Infallible> {
            let level = self.levels.get(self.pos).copied().unwrap_or(false);
            self.pos += 1;
            Ok(level)
        }
    }

    /// Delay that records the total requested time
    #[derive(Default)]
    struct CountingDelay {
        total_ns: u64,
    }

    impl DelayNs for CountingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += u64::from(ns);
        }
    }

    #[test]
    fn test_press_reported_once() {
        // poll 1: pressed, confirmed; poll 2: still held; poll 3: released
        let pin = ScriptedPin::new(&[true, true, true, false]);
        let mut button = DebouncedButton::new(pin, CountingDelay::default(), 20);

        assert!(button.pressed());
        assert!(button.is_held());
        assert!(!button.pressed());
        assert!(!button.pressed());
        assert!(!button.is_held());
        assert_eq!(button.delay.total_ns, 20_000_000);
    }

    #[test]
    fn test_bounce_rejected() {
        // Candidate press released by the confirming read
        let pin = ScriptedPin::new(&[true, false, true, true]);
        let mut button = DebouncedButton::new(pin, CountingDelay::default(), 20);

        assert!(!button.pressed());
        assert!(button.pressed());
    }

    #[test]
    fn test_idle_does_not_wait() {
        let pin = ScriptedPin::new(&[false, false]);
        let mut button = DebouncedButton::new(pin, CountingDelay::default(), 20);

        assert!(!button.pressed());
        assert!(!button.pressed());
        assert_eq!(button.delay.total_ns, 0);
    }
}
