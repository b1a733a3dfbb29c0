//! Decimal numeral rendering and parsing
//!
//! Operands are kept as strings. Computed results are rendered with the
//! ECMAScript `Number::toString` rules (shortest round-trip digits, exponent
//! form outside `[1e-6, 1e21)`), so a stored result reads exactly like the
//! number a browser calculator would show.

/// Largest decimal exponent rendered without exponent notation.
const MAX_PLAIN_EXPONENT: i32 = 21;
/// Smallest decimal exponent rendered without exponent notation.
const MIN_PLAIN_EXPONENT: i32 = -6;
/// Fraction digits at which `{:e}` prints any `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 767;

/// Render `value` the way ECMAScript's `String(number)` does.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // Covers negative zero as well.
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let Some((digits, exponent)) = shortest_digits(value.abs()) else {
        return value.to_string();
    };

    // `digits` is d1 d2 ... dk and the value is 0.d1...dk × 10^n
    let k = digits.len() as i32;
    let n = exponent + 1;

    let body = if k <= n && n <= MAX_PLAIN_EXPONENT {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= MAX_PLAIN_EXPONENT {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{int_part}.{frac_part}")
    } else if MIN_PLAIN_EXPONENT < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        format!("{}{}", mantissa(&digits), exponent_suffix(n - 1))
    };

    format!("{sign}{body}")
}

/// Render `value` with exactly `fraction_digits` digits after the point in
/// exponent notation, matching `Number.prototype.toExponential`.
///
/// Rounding works on the exact decimal expansion of the value; a value exactly
/// halfway between two candidates takes the larger one.
pub fn to_exponential(value: f64, fraction_digits: usize) -> String {
    if !value.is_finite() {
        return format_number(value);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let Some((exact, mut exponent)) = exact_digits(value.abs()) else {
        return format!("{value:.fraction_digits$e}");
    };

    let keep = fraction_digits + 1;
    let mut digits: String = exact.chars().take(keep).collect();
    while digits.len() < keep {
        digits.push('0');
    }

    if exact.as_bytes().get(keep).is_some_and(|d| *d >= b'5') {
        match increment(&digits) {
            Some(rounded) => digits = rounded,
            None => {
                digits = format!("1{}", "0".repeat(keep - 1));
                exponent += 1;
            }
        }
    }

    format!("{sign}{}{}", mantissa(&digits), exponent_suffix(exponent))
}

/// Parse an operand string into a number.
///
/// Accepts everything the engine can store: plain numerals (including a
/// trailing `.`), exponent forms and `Infinity`. `NaN` is treated as
/// unparseable.
pub fn parse_operand(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed == "." {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Shortest round-trip significant digits of a positive finite value, and
/// the decimal exponent of the first digit.
fn shortest_digits(value: f64) -> Option<(String, i32)> {
    let (digits, exponent) = split_scientific(&format!("{value:e}"))?;
    Some(prefer_even_neighbour(value, digits, exponent))
}

/// Every significant digit of the exact binary value (trailing zeros included),
/// and the decimal exponent of the first digit.
fn exact_digits(value: f64) -> Option<(String, i32)> {
    split_scientific(&format!("{value:.EXACT_FRACTION_DIGITS$e}"))
}

fn split_scientific(scientific: &str) -> Option<(String, i32)> {
    let (mantissa, exponent) = scientific.split_once('e')?;
    let exponent = exponent.parse::<i32>().ok()?;
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    Some((digits, exponent))
}

/// When `value` lies exactly halfway between `digits` and a same-length
/// neighbour that also round-trips, keep the one ending in an even digit.
fn prefer_even_neighbour(value: f64, digits: String, exponent: i32) -> (String, i32) {
    let ends_odd = digits.as_bytes().last().is_some_and(|d| (d - b'0') % 2 == 1);
    if !ends_odd {
        return (digits, exponent);
    }
    let Some((exact, exact_exponent)) = exact_digits(value) else {
        return (digits, exponent);
    };
    if exact_exponent != exponent {
        return (digits, exponent);
    }

    let exact = exact.trim_end_matches('0');
    let above = increment(&digits).filter(|_| exact == format!("{digits}5"));
    let below = decrement(&digits).filter(|lower| exact == format!("{lower}5"));

    for candidate in [above, below].into_iter().flatten() {
        let round_trips = format!("{}e{exponent}", mantissa(&candidate))
            .parse::<f64>()
            .is_ok_and(|parsed| parsed == value);
        if round_trips {
            return (candidate, exponent);
        }
    }
    (digits, exponent)
}

/// Add one unit in the last place. `None` when the carry would add a digit.
fn increment(digits: &str) -> Option<String> {
    let mut bytes = digits.as_bytes().to_vec();
    for byte in bytes.iter_mut().rev() {
        if *byte == b'9' {
            *byte = b'0';
        } else {
            *byte += 1;
            return String::from_utf8(bytes).ok();
        }
    }
    None
}

/// Subtract one unit in the last place. `None` when the leading digit would become zero.
fn decrement(digits: &str) -> Option<String> {
    let mut bytes = digits.as_bytes().to_vec();
    for byte in bytes.iter_mut().rev() {
        if *byte == b'0' {
            *byte = b'9';
        } else {
            *byte -= 1;
            break;
        }
    }
    if bytes.first().is_none_or(|d| *d == b'0') {
        return None;
    }
    String::from_utf8(bytes).ok()
}

/// `d1.d2d3...` from a digit string
fn mantissa(digits: &str) -> String {
    let (lead, rest) = digits.split_at(1);
    if rest.is_empty() { lead.to_string() } else { format!("{lead}.{rest}") }
}

fn exponent_suffix(exponent: i32) -> String {
    if exponent < 0 { format!("e{exponent}") } else { format!("e+{exponent}") }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_render_without_fraction() {
        assert_eq!(format_number(7.0), "7");
        assert_eq!(format_number(-14.0), "-14");
        assert_eq!(format_number(1_000_000.0), "1000000");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn fractions_use_shortest_digits() {
        assert_eq!(format_number(0.3), "0.3");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(0.000001), "0.000001");
    }

    #[test]
    fn extreme_magnitudes_switch_to_exponent_form() {
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e22), "1.5e+22");
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(5e-7), "5e-7");
        assert_eq!(format_number(-1.25e-8), "-1.25e-8");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn exponential_uses_signed_exponent() {
        assert_eq!(to_exponential(123_456_789_012_345.0, 5), "1.23457e+14");
        assert_eq!(to_exponential(-2e12, 5), "-2.00000e+12");
        assert_eq!(to_exponential(0.00012, 2), "1.20e-4");
        assert_eq!(to_exponential(0.0, 5), "0.00000e+0");
    }

    #[test]
    fn exponential_rounds_exact_ties_up() {
        assert_eq!(to_exponential(1_234_565_000_000.0, 5), "1.23457e+12");
        assert_eq!(to_exponential(1_000_005_000_000.0, 5), "1.00001e+12");
        assert_eq!(to_exponential(-1_234_565_000_000.0, 5), "-1.23457e+12");
        assert_eq!(to_exponential(9_999_995_000_000.0, 5), "1.00000e+13");
    }

    #[test]
    fn shortest_digit_ties_prefer_even() {
        // 21311490235052.0625 is exactly halfway between ...052.062 and ...052.063
        assert_eq!(format_number(21_311_490_235_052.0625), "21311490235052.062");
        assert_eq!(format_number(0.5), "0.5");
    }

    #[test]
    fn digit_string_steps() {
        assert_eq!(increment("129").as_deref(), Some("130"));
        assert_eq!(increment("99"), None);
        assert_eq!(decrement("130").as_deref(), Some("129"));
        assert_eq!(decrement("10"), None);
    }

    #[test]
    fn parses_incomplete_and_rendered_operands() {
        assert_eq!(parse_operand("5."), Some(5.0));
        assert_eq!(parse_operand("0.25"), Some(0.25));
        assert_eq!(parse_operand("1e+21"), Some(1e21));
        assert_eq!(parse_operand("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_operand("NaN"), None);
        assert_eq!(parse_operand(""), None);
        assert_eq!(parse_operand("."), None);
    }
}
