//! Build script for keycalc-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates calc.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate calc.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=calc.toml");

    let config_path = Path::new("calc.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: calc.toml not found!                                     ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds a calc.toml configuration file.             ║\n\
            ║  Please create one in the keycalc-firmware directory.            ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read calc.toml                                 ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in calc.toml                         ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    validate_sections(&config);
    validate_keypad(&config);
    validate_display(&config);
    validate_timing(&config);

    println!("cargo:warning=calc.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Abort the build with a boxed list of errors
fn fail(title: &str, errors: &[String]) {
    if errors.is_empty() {
        return;
    }
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        errors
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Only the known sections are allowed, and each must be a table
fn validate_sections(config: &toml::Value) {
    let mut errors = Vec::new();

    if let Some(root) = config.as_table() {
        for (name, value) in root {
            if !["keypad", "display", "timing"].contains(&name.as_str()) {
                errors.push(format!("Unknown section [{}]", name));
            } else if !value.is_table() {
                errors.push(format!("[{}] must be a table", name));
            }
        }
    }

    fail("Invalid sections in calc.toml", &errors);
}

/// Characters of a string value, if it is one
fn chars_of(table: &toml::map::Map<String, toml::Value>, key: &str) -> Option<Vec<char>> {
    table.get(key).and_then(|v| v.as_str()).map(|s| s.chars().collect())
}

/// Validate the keypad label layout
fn validate_keypad(config: &toml::Value) {
    let keypad = match config.get("keypad").and_then(|k| k.as_table()) {
        Some(t) => t,
        None => return,
    };

    let mut errors = Vec::new();

    // Start from the stock layout so partial overrides are checked as a whole
    let mut rows: Vec<Vec<char>> = ["123A", "456B", "789C", "*0#D"]
        .iter()
        .map(|r| r.chars().collect())
        .collect();
    let mut operators: Vec<char> = "ABCD".chars().collect();
    let mut point = '*';
    let mut clear = '#';

    for (key, value) in keypad {
        if value.as_str().is_none() {
            errors.push(format!("[keypad] {} must be a string", key));
        }
    }

    for (i, row) in rows.iter_mut().enumerate() {
        if let Some(chars) = chars_of(keypad, &format!("row{}", i)) {
            if chars.len() != 4 {
                errors.push(format!("[keypad] row{} must have exactly 4 labels", i));
            }
            *row = chars;
        }
    }

    if let Some(chars) = chars_of(keypad, "operators") {
        if chars.len() != 4 {
            errors.push("[keypad] operators must list 4 labels (+ - * /)".to_string());
        }
        operators = chars;
    }

    for (key, slot) in [("point", &mut point), ("clear", &mut clear)] {
        if let Some(chars) = chars_of(keypad, key) {
            match chars.as_slice() {
                [c] => *slot = *c,
                _ => errors.push(format!("[keypad] {} must be a single label", key)),
            }
        }
    }

    for key in keypad.keys() {
        let known = ["row0", "row1", "row2", "row3", "operators", "point", "clear"];
        if !known.contains(&key.as_str()) {
            errors.push(format!("[keypad] unknown key '{}'", key));
        }
    }

    let labels: Vec<char> = rows.iter().flatten().copied().collect();
    for (i, label) in labels.iter().enumerate() {
        if labels[..i].contains(label) {
            errors.push(format!("[keypad] label '{}' appears more than once", label));
        }
    }
    for digit in '0'..='9' {
        if !labels.contains(&digit) {
            errors.push(format!("[keypad] no key is labelled '{}'", digit));
        }
    }
    for label in operators.iter().chain([&point, &clear]) {
        if !labels.contains(label) {
            errors.push(format!("[keypad] '{}' is not on the keypad", label));
        }
        if label.is_ascii_digit() {
            errors.push(format!("[keypad] '{}' is already a digit key", label));
        }
    }

    fail("Invalid keypad configuration", &errors);
}

/// Integer value of a key, if present
fn int_of(table: &toml::map::Map<String, toml::Value>, key: &str, errors: &mut Vec<String>) -> Option<i64> {
    match table.get(key) {
        Some(toml::Value::Integer(n)) => Some(*n),
        Some(_) => {
            errors.push(format!("'{}' must be an integer", key));
            None
        }
        None => None,
    }
}

/// Validate display geometry
fn validate_display(config: &toml::Value) {
    let display = match config.get("display").and_then(|d| d.as_table()) {
        Some(t) => t,
        None => return,
    };

    let mut errors = Vec::new();

    let cols = int_of(display, "cols", &mut errors).unwrap_or(16);
    let rows = int_of(display, "rows", &mut errors).unwrap_or(2);
    let entry_row = int_of(display, "entry_row", &mut errors).unwrap_or(0);
    let result_row = int_of(display, "result_row", &mut errors).unwrap_or(1);

    if !(8..=40).contains(&cols) {
        errors.push("[display] cols must be 8-40".to_string());
    }
    if !(2..=4).contains(&rows) {
        errors.push("[display] rows must be 2-4".to_string());
    }
    if entry_row < 0 || entry_row >= rows {
        errors.push("[display] entry_row must be a row of the display".to_string());
    }
    if result_row < 0 || result_row >= rows {
        errors.push("[display] result_row must be a row of the display".to_string());
    }
    if entry_row == result_row {
        errors.push("[display] entry_row and result_row must differ".to_string());
    }

    fail("Invalid display configuration", &errors);
}

/// Validate timing values
fn validate_timing(config: &toml::Value) {
    let timing = match config.get("timing").and_then(|t| t.as_table()) {
        Some(t) => t,
        None => return,
    };

    let mut errors = Vec::new();

    let limits = [
        ("key_settle_us", 1, 1000),
        ("key_debounce_ms", 0, 500),
        ("button_debounce_ms", 0, 500),
        ("poll_interval_ms", 1, 1000),
        ("indicator_ms", 1, 10_000),
    ];

    for (key, min, max) in limits {
        if let Some(n) = int_of(timing, key, &mut errors) {
            if n < min || n > max {
                errors.push(format!("[timing] {} must be {}-{}", key, min, max));
            }
        }
    }
    for key in timing.keys() {
        if !limits.iter().any(|(k, _, _)| k == key) {
            errors.push(format!("[timing] unknown key '{}'", key));
        }
    }

    fail("Invalid timing configuration", &errors);
}
