//! Compute button task

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{Delay, Duration, Ticker};

use keycalc_core::traits::ComputeButton;
use keycalc_drivers::DebouncedButton;

use crate::channels::COMPUTE;

/// Board compute button
pub type BoardButton = DebouncedButton<Input<'static>, Delay>;

/// Button polling task
///
/// Signals the controller once per confirmed press.
#[embassy_executor::task]
pub async fn button_task(mut button: BoardButton, poll_ms: u32) {
    info!("Button task started");

    let mut ticker = Ticker::every(Duration::from_millis(poll_ms as u64));

    loop {
        if button.pressed() {
            debug!("Compute pressed");
            COMPUTE.signal(());
        }

        ticker.next().await;
    }
}
