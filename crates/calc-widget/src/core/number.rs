//! Numeric text rules for the calculator
//!
//! Operands travel as text. They are parsed leniently at evaluation time and
//! results are turned back into text, so NaN and infinities survive as
//! ordinary display values that later key presses keep editing.

/// Parses the leading base-10 integer of `text`.
///
/// Leading whitespace is skipped, an optional `+`/`-` sign is accepted and the
/// longest run of ASCII digits that follows is read. Anything after that run
/// is ignored. Text without digits yields NaN.
///
/// ```
/// use calc_widget::core::number::parse_leading_int;
///
/// assert_eq!(parse_leading_int("12abc"), 12.0);
/// assert_eq!(parse_leading_int("-5"), -5.0);
/// assert_eq!(parse_leading_int("1e+21"), 1.0);
/// assert!(parse_leading_int("").is_nan());
/// assert!(parse_leading_int("Infinity").is_nan());
/// ```
#[must_use]
pub fn parse_leading_int(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = unsigned
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..digits_end];

    if digits.is_empty() {
        return f64::NAN;
    }

    // A pure ASCII digit run always parses as f64 (large runs round)
    let magnitude = digits.parse::<f64>().unwrap_or(f64::NAN);
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Lower bound of the plain decimal range
const PLAIN_MIN: f64 = 1e-6;
/// Upper bound (exclusive) of the plain decimal range
const PLAIN_MAX: f64 = 1e21;

/// Formats a result for display.
///
/// - NaN is `NaN`, infinities are `Infinity` / `-Infinity`
/// - both zeros are `0`
/// - magnitudes in `[1e-6, 1e21)` are written as the shortest round-trip
///   decimal without an exponent
/// - everything else uses exponent form with an explicit sign, e.g. `1e+21`
///
/// ```
/// use calc_widget::core::number::format_number;
///
/// assert_eq!(format_number(15.0), "15");
/// assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
/// assert_eq!(format_number(f64::INFINITY), "Infinity");
/// assert_eq!(format_number(1e21), "1e+21");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() {
            "-Infinity".to_string()
        } else {
            "Infinity".to_string()
        };
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (PLAIN_MIN..PLAIN_MAX).contains(&magnitude) {
        return format!("{value}");
    }

    let exp = format!("{value:e}");
    match exp.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exp,
    }
}
