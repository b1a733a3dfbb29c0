use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary operators available on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`×`)
    Multiply,
    /// Division (`÷`)
    Divide,
}

impl Operator {
    /// Every operator, in keypad order.
    pub const ALL: [Operator; 4] =
        [Operator::Add, Operator::Subtract, Operator::Multiply, Operator::Divide];

    /// The symbol printed on the keypad button.
    pub const fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    /// Parse a keypad symbol or its ASCII keyboard alias (`*`, `x`, `/`).
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "×" | "*" | "x" => Some(Operator::Multiply),
            "÷" | "/" => Some(Operator::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single decimal digit, `0` through `9`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Create a digit from its numeric value. Returns `None` above 9.
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 { Some(Self(value)) } else { None }
    }

    /// Create a digit from an ASCII character `'0'..='9'`.
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).and_then(|d| Self::new(d as u8))
    }

    /// Numeric value of the digit
    pub const fn value(self) -> u8 {
        self.0
    }

    /// ASCII character for the digit
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<u8> for Digit {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("{value} is not a decimal digit"))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A discrete input delivered to the calculator engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum InputEvent {
    /// A digit key
    Digit(Digit),
    /// One of the four operator keys
    Operator(Operator),
    /// The equals key
    Equals,
    /// The clear key
    Clear,
    /// The decimal point key
    DecimalPoint,
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputEvent::Digit(d) => write!(f, "{d}"),
            InputEvent::Operator(op) => write!(f, "{op}"),
            InputEvent::Equals => f.write_str("="),
            InputEvent::Clear => f.write_str("C"),
            InputEvent::DecimalPoint => f.write_str("."),
        }
    }
}

/// Snapshot of the calculator's input state machine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Operand currently being typed or displayed. Never empty.
    pub current_input: String,
    /// Operand captured when an operator was pressed
    pub previous_input: Option<String>,
    /// Pending binary operator
    pub operation: Option<Operator>,
    /// When set, the next digit starts a new operand instead of extending this one
    pub should_reset_display: bool,
}

impl CalculatorState {
    /// Operand shown on a freshly started or cleared calculator
    pub const INITIAL_INPUT: &'static str = "0";

    /// The state of a freshly started or cleared calculator.
    pub fn initial() -> Self {
        Self {
            current_input: Self::INITIAL_INPUT.to_string(),
            previous_input: None,
            operation: None,
            should_reset_display: false,
        }
    }

    /// Whether this state equals the initial state
    pub fn is_initial(&self) -> bool {
        *self == Self::initial()
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::initial()
    }
}
