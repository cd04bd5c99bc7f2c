//! Press-edge detection for a bouncing push button
//!
//! The caller owns a [`DebounceState`] and feeds it raw readings. A press is
//! reported once per physical press: the first pressed reading after a
//! release must be confirmed by a second reading taken after a settle
//! delay. Holding the button reports nothing further until it is released.

/// Edge detector state owned by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceState {
    /// A confirmed press has not been released yet
    last_pressed: bool,
}

impl DebounceState {
    /// Create state for a released button
    pub const fn new() -> Self {
        Self {
            last_pressed: false,
        }
    }

    /// Feed the first reading of a poll
    ///
    /// Returns true when this reading is a candidate press that must be
    /// confirmed with [`DebounceState::confirm`] after the settle delay.
    /// A released reading re-arms the detector.
    pub fn begin(&mut self, pressed: bool) -> bool {
        if !pressed {
            self.last_pressed = false;
            return false;
        }
        !self.last_pressed
    }

    /// Feed the reading taken after the settle delay
    ///
    /// Returns true exactly when the press is confirmed.
    pub fn confirm(&mut self, pressed: bool) -> bool {
        if pressed {
            self.last_pressed = true;
        }
        pressed
    }

    /// Whether a confirmed press is still being held
    pub fn is_held(&self) -> bool {
        self.last_pressed
    }
}

/// Detect a debounced press edge
///
/// Reads the button, and if the reading is a candidate press waits via
/// `settle` and reads again. Returns true once per physical press.
pub fn detect_edge<R, S>(state: &mut DebounceState, mut read: R, settle: S) -> bool
where
    R: FnMut() -> bool,
    S: FnOnce(),
{
    if !state.begin(read()) {
        return false;
    }
    settle();
    state.confirm(read())
}
