//! Fixed three-decimal result formatting
//!
//! Results are rendered as `I.FFF` or `-I.FFF`: sign separated from the
//! magnitude, magnitude rounded half away from zero to thousandths, fraction
//! always three digits. No grouping, no exponent.

use core::fmt::{self, Write};

use heapless::String;

/// Capacity of a formatted result
///
/// Sign, up to 17 integer digits (`u64::MAX / 1000`), point and three
/// fraction digits.
pub const FIXED3_CAPACITY: usize = 24;

/// Fixed-capacity formatted result
pub type Fixed3 = String<FIXED3_CAPACITY>;

/// Errors that can occur while formatting a result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FormatError {
    /// Value is NaN, infinite, or too large to scale to thousandths
    OutOfRange,
    /// Destination rejected the write
    Write,
}

impl From<fmt::Error> for FormatError {
    fn from(_: fmt::Error) -> Self {
        FormatError::Write
    }
}

/// Largest magnitude (scaled to thousandths, plus the rounding half) that fits a `u64`
const MAX_SCALED: f64 = 18_446_744_073_709_551_615.0;

/// Scale a non-negative magnitude to rounded thousandths
///
/// `floor(x + 0.5)` equals truncation for non-negative `x`, so the integer
/// cast performs the rounding.
fn scale_thousandths(magnitude: f64) -> Result<u64, FormatError> {
    let shifted = magnitude * 1000.0 + 0.5;
    if !shifted.is_finite() || shifted >= MAX_SCALED {
        return Err(FormatError::OutOfRange);
    }
    Ok(shifted as u64)
}

/// Write `value` with exactly three fraction digits into `out`
pub fn write_fixed3<W: Write>(value: f64, out: &mut W) -> Result<(), FormatError> {
    if value.is_nan() {
        return Err(FormatError::OutOfRange);
    }

    let negative = value < 0.0;
    let magnitude = if negative { -value } else { value };
    let scaled = scale_thousandths(magnitude)?;

    let integer = scaled / 1000;
    let fraction = scaled % 1000;

    if negative {
        out.write_char('-')?;
    }
    write!(out, "{}.{:03}", integer, fraction)?;
    Ok(())
}

/// Format `value` with exactly three fraction digits
///
/// # Example
/// ```
/// use keycalc_core::format_fixed3;
///
/// assert_eq!(format_fixed3(11.0).unwrap().as_str(), "11.000");
/// assert_eq!(format_fixed3(-0.5).unwrap().as_str(), "-0.500");
/// ```
pub fn format_fixed3(value: f64) -> Result<Fixed3, FormatError> {
    let mut out = Fixed3::new();
    write_fixed3(value, &mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt3(value: f64) -> Fixed3 {
        format_fixed3(value).unwrap()
    }

    #[test]
    fn test_whole_numbers() {
        assert_eq!(fmt3(11.0).as_str(), "11.000");
        assert_eq!(fmt3(0.0).as_str(), "0.000");
        assert_eq!(fmt3(123.0).as_str(), "123.000");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(fmt3(-0.5).as_str(), "-0.500");
        assert_eq!(fmt3(-3.0).as_str(), "-3.000");
        assert_eq!(fmt3(-1.5).as_str(), "-1.500");
    }

    #[test]
    fn test_zero_is_never_negative() {
        assert_eq!(fmt3(-0.0).as_str(), "0.000");
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(fmt3(1.0005).as_str(), "1.001");
        assert_eq!(fmt3(0.9995).as_str(), "1.000");
        assert_eq!(fmt3(123.4565).as_str(), "123.457");
        assert_eq!(fmt3(-1.0005).as_str(), "-1.001");
        assert_eq!(fmt3(0.0004999).as_str(), "0.000");
    }

    #[test]
    fn test_fraction_zero_padding() {
        assert_eq!(fmt3(2.05).as_str(), "2.050");
        assert_eq!(fmt3(2.007).as_str(), "2.007");
    }

    #[test]
    fn test_large_magnitude() {
        assert_eq!(fmt3(1.0e15).as_str(), "1000000000000000.000");
        assert_eq!(fmt3(-1.0e15).as_str(), "-1000000000000000.000");
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(format_fixed3(f64::NAN), Err(FormatError::OutOfRange));
        assert_eq!(format_fixed3(f64::INFINITY), Err(FormatError::OutOfRange));
        assert_eq!(format_fixed3(f64::NEG_INFINITY), Err(FormatError::OutOfRange));
        assert_eq!(format_fixed3(1.0e17), Err(FormatError::OutOfRange));
    }

    #[test]
    fn test_write_into_small_sink() {
        let mut small: String<4> = String::new();
        assert_eq!(write_fixed3(12.5, &mut small), Err(FormatError::Write));
    }
}
