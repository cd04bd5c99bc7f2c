//! Keypad polling task
//!
//! Scans the matrix every `poll_ms` and forwards decoded labels to the
//! controller. Scanning blocks while a key is held, so each press is
//! forwarded once, on release.

use defmt::*;
use embassy_rp::gpio::{Input, Output};
use embassy_time::{Delay, Duration, Ticker};

use keycalc_core::traits::Keypad;
use keycalc_drivers::MatrixKeypad;

use crate::channels::KEY_CHANNEL;

/// Board keypad: pulled-up row inputs, column outputs
pub type BoardKeypad = MatrixKeypad<Input<'static>, Output<'static>, Delay>;

/// Keypad polling task
#[embassy_executor::task]
pub async fn keypad_task(mut keypad: BoardKeypad, poll_ms: u32) {
    info!("Keypad task started");

    let mut ticker = Ticker::every(Duration::from_millis(poll_ms as u64));

    loop {
        match keypad.poll() {
            Ok(Some(label)) => {
                trace!("Key '{}'", label);
                KEY_CHANNEL.send(label).await;
            }
            Ok(None) => {}
            Err(e) => warn!("Keypad scan failed: {}", e),
        }

        ticker.next().await;
    }
}
