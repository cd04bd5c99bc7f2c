//! Calculator controller task
//!
//! Owns the entry session and the LCD. Key labels and compute presses are
//! handled in arrival order; pending keys are drained before a compute
//! press so that nothing typed is lost.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::Output;
use embassy_time::Delay;

use keycalc_core::session::{Calculator, Computation, KeyResponse};
use keycalc_drivers::Hd44780;

use crate::channels::{Indication, COMPUTE, INDICATOR, KEY_CHANNEL};

/// Board character LCD
pub type BoardDisplay = Hd44780<Output<'static>, Delay>;

/// Calculator rendering to the board LCD
pub type BoardCalculator = Calculator<BoardDisplay>;

/// Controller task
#[embassy_executor::task]
pub async fn controller_task(mut calculator: BoardCalculator) {
    info!("Controller task started");

    if let Err(e) = calculator.reset() {
        error!("Display reset failed: {}", e);
    }

    loop {
        match select(KEY_CHANNEL.receive(), COMPUTE.wait()).await {
            Either::First(label) => handle_label(&mut calculator, label),
            Either::Second(()) => {
                while let Ok(label) = KEY_CHANNEL.try_receive() {
                    handle_label(&mut calculator, label);
                }
                handle_compute(&mut calculator);
            }
        }
    }
}

fn handle_label(calculator: &mut BoardCalculator, label: char) {
    match calculator.handle_label(label) {
        Ok(KeyResponse::Appended) => trace!("Entry: {}", calculator.session().buffer()),
        Ok(KeyResponse::Cleared) => debug!("Entry cleared"),
        Ok(KeyResponse::Ignored) => debug!("Key '{}' ignored", label),
        Err(e) => error!("Display write failed: {}", e),
    }
}

fn handle_compute(calculator: &mut BoardCalculator) {
    match calculator.handle_compute() {
        Ok(Some(Computation::Value(text))) => {
            info!("Result: {}", text.as_str());
            INDICATOR.signal(Indication::Success);
        }
        Ok(Some(Computation::Error(e))) => {
            warn!("Computation failed: {}", e);
            INDICATOR.signal(Indication::Failure);
        }
        Ok(None) => debug!("Entry incomplete, compute ignored"),
        Err(e) => {
            error!("Display write failed: {}", e);
            INDICATOR.signal(Indication::Failure);
        }
    }
}
