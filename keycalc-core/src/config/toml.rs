//! Minimal TOML parser for the calculator configuration
//!
//! Handles only the subset used by `calc.toml`. It does NOT support the
//! full TOML spec and never allocates.
//!
//! Supported features:
//! - `[keypad]`, `[display]` and `[timing]` section headers
//! - Key = value pairs (string, integer)
//! - Comments (# ...)
//!
//! NOT supported:
//! - Multi-line strings, arrays, inline tables
//! - Dotted keys

use super::types::{CalcConfig, ConfigError};
use crate::input::{KEYPAD_COLS, KEYPAD_ROWS};

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Key not recognised in its section
    UnknownKey,
    /// Value has the wrong type or is out of range
    InvalidValue,
    /// Parsed configuration failed validation
    Invalid(ConfigError),
}

impl From<ConfigError> for ParseError {
    fn from(e: ConfigError) -> Self {
        ParseError::Invalid(e)
    }
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Keypad,
    Display,
    Timing,
}

/// Parse TOML configuration into a validated [`CalcConfig`]
///
/// Keys that are not present keep their default values.
pub fn parse_config(input: &str) -> Result<CalcConfig, ParseError> {
    let mut config = CalcConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::InvalidValue)?;
        apply_value(section, key, value, &mut config)?;
    }

    config.validate()?;
    Ok(config)
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "keypad" => Ok(Section::Keypad),
        "display" => Ok(Section::Display),
        "timing" => Ok(Section::Timing),
        _ => Err(ParseError::InvalidSection),
    }
}

fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut CalcConfig,
) -> Result<(), ParseError> {
    match section {
        Section::Root => Err(ParseError::UnknownKey),
        Section::Keypad => {
            let keymap = &mut config.keymap;
            match key {
                "row0" => keymap.labels[0] = parse_row(value)?,
                "row1" => keymap.labels[1] = parse_row(value)?,
                "row2" => keymap.labels[2] = parse_row(value)?,
                "row3" => keymap.labels[3] = parse_row(value)?,
                "operators" => keymap.operators = parse_chars::<4>(value)?,
                "point" => keymap.point = parse_chars::<1>(value)?[0],
                "clear" => keymap.clear = parse_chars::<1>(value)?[0],
                _ => return Err(ParseError::UnknownKey),
            }
            Ok(())
        }
        Section::Display => {
            let display = &mut config.display;
            match key {
                "cols" => display.cols = parse_int(value)?,
                "rows" => display.rows = parse_int(value)?,
                "entry_row" => display.entry_row = parse_int(value)?,
                "result_row" => display.result_row = parse_int(value)?,
                _ => return Err(ParseError::UnknownKey),
            }
            Ok(())
        }
        Section::Timing => {
            let timing = &mut config.timing;
            match key {
                "key_settle_us" => timing.key_settle_us = parse_int(value)?,
                "key_debounce_ms" => timing.key_debounce_ms = parse_int(value)?,
                "button_debounce_ms" => timing.button_debounce_ms = parse_int(value)?,
                "poll_interval_ms" => timing.poll_interval_ms = parse_int(value)?,
                "indicator_ms" => timing.indicator_ms = parse_int(value)?,
                _ => return Err(ParseError::UnknownKey),
            }
            Ok(())
        }
    }
}

/// Parse key = value
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    // Remove inline comments, skipping any # inside a string
    let mut in_string = false;
    let comment_pos = value.char_indices().find_map(|(i, c)| match c {
        '"' => {
            in_string = !in_string;
            None
        }
        '#' if !in_string => Some(i),
        _ => None,
    });
    let value = match comment_pos {
        Some(pos) => value[..pos].trim(),
        None => value,
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a quoted string value
fn parse_string(value: &str) -> Result<&str, ParseError> {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        Ok(&value[1..value.len() - 1])
    } else {
        Err(ParseError::InvalidValue)
    }
}

/// Parse a quoted string of exactly `N` characters
fn parse_chars<const N: usize>(value: &str) -> Result<[char; N], ParseError> {
    let s = parse_string(value)?;
    let mut out = [' '; N];
    let mut chars = s.chars();
    for slot in out.iter_mut() {
        *slot = chars.next().ok_or(ParseError::InvalidValue)?;
    }
    if chars.next().is_some() {
        return Err(ParseError::InvalidValue);
    }
    Ok(out)
}

fn parse_row(value: &str) -> Result<[char; KEYPAD_COLS], ParseError> {
    parse_chars::<KEYPAD_COLS>(value)
}

/// Parse an integer value
fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue)
}

const _: () = assert!(KEYPAD_ROWS == 4, "keypad section names rows row0..row3");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::Operator;
    use crate::input::Key;

    const STOCK: &str = r##"
# Stock 4x4 membrane keypad
[keypad]
row0 = "123A"
row1 = "456B"
row2 = "789C"
row3 = "*0#D"
operators = "ABCD"
point = "*"   # no dedicated point key
clear = "#"

[display]
cols = 16
rows = 2
entry_row = 0
result_row = 1

[timing]
key_settle_us = 10
key_debounce_ms = 50
button_debounce_ms = 20
poll_interval_ms = 50
indicator_ms = 1000
"##;

    #[test]
    fn test_stock_config_matches_defaults() {
        assert_eq!(parse_config(STOCK), Ok(CalcConfig::default()));
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(parse_config(""), Ok(CalcConfig::default()));
    }

    #[test]
    fn test_remapped_keys() {
        let input = r#"
[keypad]
row3 = ".0CD"
point = "."
clear = "C"
operators = "ABxD"
row2 = "789x"
"#;
        let config = parse_config(input).unwrap();
        assert_eq!(config.keymap.decode('.'), Some(Key::Point));
        assert_eq!(config.keymap.decode('C'), Some(Key::Clear));
        assert_eq!(config.keymap.decode('x'), Some(Key::Operator(Operator::Mul)));
    }

    #[test]
    fn test_inconsistent_keymap_rejected() {
        let input = "[keypad]\npoint = \"Q\"\n";
        assert_eq!(
            parse_config(input),
            Err(ParseError::Invalid(ConfigError::InconsistentKeyMap))
        );
    }

    #[test]
    fn test_bad_values() {
        assert_eq!(
            parse_config("[display]\ncols = wide\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[display]\ncols = 300\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[keypad]\nrow0 = \"12345\"\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[keypad]\npoint = *\n"),
            Err(ParseError::InvalidValue)
        );
    }

    #[test]
    fn test_unknown_section_and_key() {
        assert_eq!(parse_config("[stepper]\n"), Err(ParseError::InvalidSection));
        assert_eq!(
            parse_config("[timing]\nwarp = 9\n"),
            Err(ParseError::UnknownKey)
        );
        assert_eq!(parse_config("cols = 16\n"), Err(ParseError::UnknownKey));
    }

    #[test]
    fn test_hash_inside_string_is_kept() {
        let config = parse_config("[keypad]\nclear = \"#\" # clear key\n").unwrap();
        assert_eq!(config.keymap.clear, '#');
    }
}
