//! Keyboard key names to input events
//!
//! Key names follow the DOM `KeyboardEvent.key` convention (`"7"`, `"Enter"`,
//! `"Escape"`). On-screen button labels (`"×"`, `"÷"`) map as well, so a keypad
//! front end can feed its labels through the same table.

use abacus_types::{Digit, InputEvent, Operator};

/// Map a key name to the event it triggers, or `None` if the key is unbound.
pub fn map_key(key: &str) -> Option<InputEvent> {
    match key {
        "Enter" | "=" => Some(InputEvent::Equals),
        "Escape" | "c" | "C" => Some(InputEvent::Clear),
        "." => Some(InputEvent::DecimalPoint),
        // "x" is a multiplication alias for typed expressions, not a bound key
        "x" => None,
        _ => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_digit() => Digit::from_char(c).map(InputEvent::Digit),
                _ => Operator::from_symbol(key).map(InputEvent::Operator),
            }
        }
    }
}
