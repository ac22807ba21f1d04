// ABOUTME: Human-friendly number formatting and its inverse.
// ABOUTME: English digit grouping ("1,000"); deprettify strips everything but digits.

/// Placeholder shown for zero when zero means "unknown".
pub const UNKNOWN_NUMBER: &str = "?";

const MAX_FRACTION_DIGITS: usize = 3;

/// Formats a number with thousands separators and at most three fractional digits.
///
/// The last digit is rounded half away from zero (`0.0625` gives `0.063`). Trailing fractional zeros are dropped. When `zero_is_special` is set, zero is
/// rendered as `?` (for counters where zero means "not known").
pub fn prettify_number(value: f64, zero_is_special: bool) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return zero(zero_is_special);
    }

    let (integer, fraction) = round_half_away(value.abs());
    let fraction = fraction.trim_end_matches('0');

    let mut result = group_thousands(&integer);
    if !fraction.is_empty() {
        result.push('.');
        result.push_str(fraction);
    }

    // Tiny values can round to zero; don't render "-0".
    if value < 0.0 && result.chars().any(|c| matches!(c, '1'..='9')) {
        result.insert(0, '-');
    }

    result
}

/// Integer variant of [`prettify_number`] without the float round trip.
pub fn prettify_integer(value: i64, zero_is_special: bool) -> String {
    if value == 0 {
        return zero(zero_is_special);
    }

    let grouped = group_thousands(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Parses a prettified number back by keeping only its ASCII digits.
///
/// Empty input, input without digits, and values that overflow `u64` give 0.
pub fn deprettify_number(s: &str) -> u64 {
    let digits: String = s.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

/// Parses an "amount" of the form `done/total`, e.g. `1,036/2,316`.
///
/// A missing half is 0.
pub fn deprettify_amount(s: &str) -> (u64, u64) {
    match s.split_once('/') {
        Some((done, total)) => (deprettify_number(done), deprettify_number(total)),
        None => (deprettify_number(s), 0),
    }
}

/// Splits a non-negative value into integer digits and exactly
/// `MAX_FRACTION_DIGITS` fraction digits, rounding ties away from zero.
fn round_half_away(value: f64) -> (String, String) {
    // Past 2^53 every f64 is an integer, and scaling would lose digits.
    if value >= 9_007_199_254_740_992.0 {
        return (format!("{:.0}", value), String::new());
    }

    let scale = 10u64.pow(MAX_FRACTION_DIGITS as u32);
    let scaled = (value * scale as f64).round();
    if !scaled.is_finite() || scaled >= u64::MAX as f64 {
        return (format!("{:.0}", value.round()), String::new());
    }

    let scaled = scaled as u64;
    (
        (scaled / scale).to_string(),
        format!("{:0width$}", scaled % scale, width = MAX_FRACTION_DIGITS),
    )
}

fn zero(zero_is_special: bool) -> String {
    if zero_is_special {
        UNKNOWN_NUMBER.to_string()
    } else {
        "0".to_string()
    }
}

fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}
