//! Field Parsing
//!
//! Lenient number parsing for form fields: a numeric prefix is accepted and
//! trailing characters are ignored, so `"12.7"` reads as the integer 12 and
//! `"3kg"` as the float 3. [`display_number`] renders parsed values back the
//! way the page's script would print them.

/// Parse a leading decimal integer (optional sign). `None` if there are no digits.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = split_sign(s);
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let value = rest[..digits]
        .parse::<i64>()
        .unwrap_or(i64::MAX);
    Some(if negative { value.saturating_neg() } else { value })
}

/// Parse a leading float: digits with optional fraction and exponent, or `Infinity`.
pub fn parse_float_prefix(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let (negative, rest) = split_sign(s);
    let sign = if negative { -1.0 } else { 1.0 };

    if rest.starts_with("Infinity") {
        return Some(sign * f64::INFINITY);
    }

    let bytes = rest.as_bytes();
    let mut end = 0;
    let mut mantissa_digits = 0;

    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        mantissa_digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            mantissa_digits += 1;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    rest[..end].parse::<f64>().ok().map(|v| sign * v)
}

/// Render a number like `String(n)` in the browser: `Infinity`, no negative
/// zero, and exponent form outside `[1e-6, 1e21)`.
pub fn display_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    // `{:e}` gives the shortest mantissa; only the exponent sign differs
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_prefix() {
        assert_eq!(parse_int_prefix("42"), Some(42));
        assert_eq!(parse_int_prefix("  -7"), Some(-7));
        assert_eq!(parse_int_prefix("+3"), Some(3));
        assert_eq!(parse_int_prefix("12.7"), Some(12));
        assert_eq!(parse_int_prefix("30 years"), Some(30));
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix("-"), None);
        assert_eq!(parse_int_prefix("99999999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn test_float_prefix() {
        assert_eq!(parse_float_prefix("2.5"), Some(2.5));
        assert_eq!(parse_float_prefix("-0.25"), Some(-0.25));
        assert_eq!(parse_float_prefix(".5"), Some(0.5));
        assert_eq!(parse_float_prefix("5."), Some(5.0));
        assert_eq!(parse_float_prefix("1e3"), Some(1000.0));
        assert_eq!(parse_float_prefix("1e"), Some(1.0));
        assert_eq!(parse_float_prefix("3kg"), Some(3.0));
        assert_eq!(parse_float_prefix("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_float_prefix("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_float_prefix("."), None);
        assert_eq!(parse_float_prefix("NaN"), None);
        assert_eq!(parse_float_prefix(""), None);
    }

    #[test]
    fn test_display_number_plain_range() {
        assert_eq!(display_number(2.5), "2.5");
        assert_eq!(display_number(-12.0), "-12");
        assert_eq!(display_number(0.000001), "0.000001");
        assert_eq!(display_number(1e20), "100000000000000000000");
    }

    #[test]
    fn test_display_number_special_values() {
        assert_eq!(display_number(-0.0), "0");
        assert_eq!(display_number(f64::INFINITY), "Infinity");
        assert_eq!(display_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(display_number(f64::NAN), "NaN");
    }

    #[test]
    fn test_display_number_exponent_form() {
        assert_eq!(display_number(1e21), "1e+21");
        assert_eq!(display_number(1.5e21), "1.5e+21");
        assert_eq!(display_number(-2e300), "-2e+300");
        assert_eq!(display_number(1e-7), "1e-7");
        assert_eq!(display_number(2.5e-9), "2.5e-9");
    }
}
