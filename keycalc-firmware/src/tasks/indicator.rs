//! Success/error indicator LEDs
//!
//! Lights the green LED after a successful computation and the red LED
//! after a failed one, for `indicator_ms`. A new outcome arriving while an
//! LED is lit replaces it and restarts the pulse.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::Output;
use embassy_time::{Duration, Timer};

use crate::channels::{Indication, INDICATOR};

/// Indicator task
#[embassy_executor::task]
pub async fn indicator_task(mut green: Output<'static>, mut red: Output<'static>, pulse_ms: u32) {
    info!("Indicator task started");

    let pulse = Duration::from_millis(pulse_ms as u64);

    loop {
        let mut indication = INDICATOR.wait().await;

        loop {
            match indication {
                Indication::Success => {
                    red.set_low();
                    green.set_high();
                }
                Indication::Failure => {
                    green.set_low();
                    red.set_high();
                }
            }

            match select(Timer::after(pulse), INDICATOR.wait()).await {
                Either::First(()) => break,
                Either::Second(next) => {
                    debug!("Indicator restarted: {}", next);
                    indication = next;
                }
            }
        }

        green.set_low();
        red.set_low();
    }
}
