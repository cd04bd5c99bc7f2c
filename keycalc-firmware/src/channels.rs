//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

/// Channel capacity for decoded key labels
const KEY_CHANNEL_SIZE: usize = 8;

/// Outcome shown on the indicator LEDs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Indication {
    /// Computation produced a value (green)
    Success,
    /// Computation failed (red)
    Failure,
}

/// Key labels from the keypad task, in press order
pub static KEY_CHANNEL: Channel<CriticalSectionRawMutex, char, KEY_CHANNEL_SIZE> = Channel::new();

/// Signal that the compute button was pressed
pub static COMPUTE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Latest computation outcome (updated by the controller)
pub static INDICATOR: Signal<CriticalSectionRawMutex, Indication> = Signal::new();
