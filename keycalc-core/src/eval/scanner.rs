//! Decimal number scanning
//!
//! Numbers are an optional run of digits followed by an optional `.` and
//! fractional digits. A number must start with a digit or with `.` directly
//! followed by a digit; a bare `.` is not a number.

/// Scan a number starting at `start`
///
/// Returns the value and the number of bytes consumed (at least 1), or
/// `None` if no number starts at `start`. Digit count is unbounded; very
/// long inputs saturate to infinity like any other `f64` arithmetic.
pub fn scan_number(input: &[u8], start: usize) -> Option<(f64, usize)> {
    let rest = input.get(start..)?;
    let starts_number = match rest {
        [b, ..] if b.is_ascii_digit() => true,
        [b'.', b, ..] if b.is_ascii_digit() => true,
        _ => false,
    };
    if !starts_number {
        return None;
    }

    let mut pos = 0;
    let mut value = 0.0f64;

    while let Some(&b) = rest.get(pos).filter(|b| b.is_ascii_digit()) {
        value = value * 10.0 + f64::from(b - b'0');
        pos += 1;
    }

    if rest.get(pos) == Some(&b'.') {
        pos += 1;
        let mut place = 0.1f64;
        while let Some(&b) = rest.get(pos).filter(|b| b.is_ascii_digit()) {
            value += f64::from(b - b'0') * place;
            place *= 0.1;
            pos += 1;
        }
    }

    Some((value, pos))
}
