//! Numeric tokens with magnitude suffixes.

/// Parse a number with an optional `K`/`M` magnitude suffix.
///
/// The token must start with a decimal number, optionally fractional. A
/// directly following `K` (thousand) or `M` (million), in either case,
/// scales the value. Anything after the number and suffix is ignored.
/// Fractional results are rounded half away from zero.
///
/// Returns `None` when the token does not start with a digit.
///
/// ```
/// use modelscout_rate_limit::parse_magnitude;
///
/// assert_eq!(parse_magnitude("15K"), Some(15_000));
/// assert_eq!(parse_magnitude("14.4k"), Some(14_400));
/// assert_eq!(parse_magnitude("1M tokens"), Some(1_000_000));
/// assert_eq!(parse_magnitude("500"), Some(500));
/// assert_eq!(parse_magnitude("n/a"), None);
/// ```
pub fn parse_magnitude(token: &str) -> Option<u64> {
    let integer_end = leading_digits(token);
    if integer_end == 0 {
        return None;
    }

    let mut number_end = integer_end;
    if let Some(fraction) = token[integer_end..].strip_prefix('.') {
        let fraction_len = leading_digits(fraction);
        if fraction_len > 0 {
            number_end = integer_end + 1 + fraction_len;
        }
    }

    let multiplier: u64 = match token[number_end..].chars().next() {
        Some('k' | 'K') => 1_000,
        Some('m' | 'M') => 1_000_000,
        _ => 1,
    };

    if number_end == integer_end {
        // Whole numbers stay exact instead of going through f64.
        if let Ok(whole) = token[..integer_end].parse::<u64>() {
            return Some(whole.saturating_mul(multiplier));
        }
    }

    let number: f64 = token[..number_end].parse().ok()?;
    // `as` saturates at u64::MAX for out-of-range values.
    Some((number * multiplier as f64).round() as u64)
}

/// Byte length of the ASCII digit run at the start of `s`.
fn leading_digits(s: &str) -> usize {
    s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len())
}
