//! Display text for the current operand
//!
//! This is a pure view of the operand string; it never touches engine state.

use crate::config::DisplayConfig;
use crate::numeral::{format_number, parse_operand, to_exponential};

/// Turn an operand string into the text shown on the display.
///
/// Short operands are shown verbatim. Long ones are reparsed: large
/// magnitudes switch to exponent notation, everything else is re-rendered and
/// cut to the display width. The cut may land mid-fraction; it is cosmetic only.
pub fn format_display(operand: &str, config: &DisplayConfig) -> String {
    if operand.chars().count() <= config.max_length {
        return operand.to_string();
    }

    let Some(value) = parse_operand(operand) else {
        return truncate(operand, config.max_length);
    };

    if value.abs() >= config.exponent_threshold {
        to_exponential(value, config.exponent_digits)
    } else {
        truncate(&format_number(value), config.max_length)
    }
}

fn truncate(text: &str, max_length: usize) -> String {
    text.chars().take(max_length).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(operand: &str) -> String {
        format_display(operand, &DisplayConfig::default())
    }

    #[test]
    fn short_operands_are_verbatim() {
        assert_eq!(show("0"), "0");
        assert_eq!(show("0."), "0.");
        assert_eq!(show("123456789012"), "123456789012");
        assert_eq!(show("-0.000001"), "-0.000001");
    }

    #[test]
    fn long_small_operands_are_truncated() {
        assert_eq!(show("0.12345678901234"), "0.1234567890");
        assert_eq!(show("12345678901.56"), "12345678901.");
    }

    #[test]
    fn long_trailing_zeros_collapse_before_truncation() {
        assert_eq!(show("0.0000000000000"), "0");
        assert_eq!(show("1.500000000000"), "1.5");
    }

    #[test]
    fn large_operands_use_exponent_notation() {
        assert_eq!(show("123456789012345"), "1.23457e+14");
        assert_eq!(show("1000000000000"), "1.00000e+12");
        assert_eq!(show("-9999999999999"), "-1.00000e+13");
    }

    #[test]
    fn exponent_notation_rounds_halfway_values_up() {
        assert_eq!(show("1234565000000"), "1.23457e+12");
        assert_eq!(show("1000005000000"), "1.00001e+12");
    }

    #[test]
    fn very_small_values_render_in_exponent_form() {
        assert_eq!(show("0.000000000001"), "1e-12");
    }

    #[test]
    fn custom_width_is_respected() {
        let config = DisplayConfig { max_length: 4, ..DisplayConfig::default() };
        assert_eq!(format_display("1234", &config), "1234");
        assert_eq!(format_display("12.345", &config), "12.3");
    }
}
