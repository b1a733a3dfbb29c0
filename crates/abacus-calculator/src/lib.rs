#![deny(warnings)]
//! The keypad calculator engine for Abacus.
//!
//! This crate provides [`CalculatorEngine`], a small input state machine that
//! accepts discrete keypad events (digits, operators, equals, decimal point,
//! clear) and returns the text to display after each one. Arithmetic,
//! numeral rendering and display formatting are exposed as standalone
//! modules so front ends can reuse them.

pub mod arithmetic;
pub mod config;
pub mod display;
pub mod engine;
pub mod error;
pub mod keyboard;
pub mod numeral;

pub use abacus_types::{CalculatorState, Digit, InputEvent, Operator};
pub use arithmetic::{evaluate, evaluate_with_precision};
pub use config::{DisplayConfig, EngineConfig};
pub use display::format_display;
pub use engine::CalculatorEngine;
pub use error::{CalculatorError, CalculatorResult};
pub use keyboard::map_key;
