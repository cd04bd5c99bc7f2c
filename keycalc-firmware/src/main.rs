//! Keycalc - Keypad Calculator Firmware
//!
//! Main firmware binary for RP2040-based boards: a 4x4 matrix keypad, a
//! compute button, a 16x2 HD44780 LCD and two indicator LEDs. Expressions
//! typed on the keypad are evaluated with standard operator precedence
//! and shown with three decimals.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use keycalc_core::config::{parse_config, CalcConfig};
use keycalc_core::session::Calculator;
use keycalc_drivers::lcd::Hd44780Pins;
use keycalc_drivers::{DebouncedButton, Hd44780, MatrixKeypad};

mod channels;
mod tasks;

/// Embedded configuration (compiled into firmware)
/// Edit calc.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../calc.toml");

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Keycalc firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config();
    let timing = config.timing;

    // Keypad: rows on GPIO2-5 (pulled up), columns on GPIO6-9 (idle high)
    let rows = [
        Input::new(p.PIN_2, Pull::Up),
        Input::new(p.PIN_3, Pull::Up),
        Input::new(p.PIN_4, Pull::Up),
        Input::new(p.PIN_5, Pull::Up),
    ];
    let cols = [
        Output::new(p.PIN_6, Level::High),
        Output::new(p.PIN_7, Level::High),
        Output::new(p.PIN_8, Level::High),
        Output::new(p.PIN_9, Level::High),
    ];
    let keypad = unwrap!(MatrixKeypad::new(rows, cols, Delay, config.keymap, &timing));
    info!("Keypad initialized");

    // Compute button on GPIO10, switch to ground
    let button = DebouncedButton::new(Input::new(p.PIN_10, Pull::Up), Delay, timing.button_debounce_ms);

    // LCD: RS=GPIO16, E=GPIO17, D4-D7=GPIO18-21, R/W tied low
    let lcd_pins = Hd44780Pins {
        rs: Output::new(p.PIN_16, Level::Low),
        en: Output::new(p.PIN_17, Level::Low),
        d4: Output::new(p.PIN_18, Level::Low),
        d5: Output::new(p.PIN_19, Level::Low),
        d6: Output::new(p.PIN_20, Level::Low),
        d7: Output::new(p.PIN_21, Level::Low),
    };
    let lcd = unwrap!(Hd44780::new(lcd_pins, Delay, config.display.cols, config.display.rows));
    info!("LCD initialized ({}x{})", config.display.cols, config.display.rows);

    // Indicator LEDs: green on GPIO14, red on GPIO15
    let green = Output::new(p.PIN_14, Level::Low);
    let red = Output::new(p.PIN_15, Level::Low);

    let calculator = Calculator::new(lcd, &config);

    spawner
        .spawn(tasks::keypad_task(keypad, timing.poll_interval_ms))
        .unwrap();
    spawner
        .spawn(tasks::button_task(button, timing.poll_interval_ms))
        .unwrap();
    spawner.spawn(tasks::controller_task(calculator)).unwrap();
    spawner
        .spawn(tasks::indicator_task(green, red, timing.indicator_ms))
        .unwrap();

    info!("All tasks spawned, firmware running");
}

/// Parse the embedded configuration
///
/// Falls back to the built-in defaults if calc.toml does not parse; the
/// build script normally rejects such a file before it gets here.
fn load_config() -> CalcConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Parsed embedded configuration successfully");
            config
        }
        Err(e) => {
            error!("Failed to parse embedded config: {}", e);
            warn!("Using default configuration");
            CalcConfig::default()
        }
    }
}
