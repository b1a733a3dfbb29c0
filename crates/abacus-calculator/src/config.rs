use serde::{Deserialize, Serialize};

/// Decimal places kept after every arithmetic step
pub const DEFAULT_PRECISION: u32 = 8;
/// Most decimal places an `f64` result can meaningfully keep
pub const MAX_PRECISION: u32 = 15;
/// Longest operand string shown verbatim
pub const DEFAULT_MAX_DISPLAY_LENGTH: usize = 12;
/// Magnitude from which long operands are shown in exponent notation
pub const DEFAULT_EXPONENT_THRESHOLD: f64 = 1e12;
/// Fractional digits of the exponent notation
pub const DEFAULT_EXPONENT_DIGITS: usize = 5;

/// How the current operand is turned into display text
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Operands up to this many characters are shown verbatim
    #[serde(default = "default_max_length")]
    pub max_length: usize,
    /// Longer operands at or above this magnitude use exponent notation
    #[serde(default = "default_exponent_threshold")]
    pub exponent_threshold: f64,
    /// Digits after the point in exponent notation
    #[serde(default = "default_exponent_digits")]
    pub exponent_digits: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_DISPLAY_LENGTH,
            exponent_threshold: DEFAULT_EXPONENT_THRESHOLD,
            exponent_digits: DEFAULT_EXPONENT_DIGITS,
        }
    }
}

/// Engine tunables. Defaults reproduce the stock keypad calculator.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Decimal places results are rounded to, at most [`MAX_PRECISION`]
    #[serde(default = "default_precision")]
    pub precision: u32,
    /// Display formatting
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { precision: DEFAULT_PRECISION, display: DisplayConfig::default() }
    }
}

fn default_precision() -> u32 {
    DEFAULT_PRECISION
}
fn default_max_length() -> usize {
    DEFAULT_MAX_DISPLAY_LENGTH
}
fn default_exponent_threshold() -> f64 {
    DEFAULT_EXPONENT_THRESHOLD
}
fn default_exponent_digits() -> usize {
    DEFAULT_EXPONENT_DIGITS
}
