//! Abacus Types
//!
//! This crate defines the core types shared across the Abacus workspace
//! (currently `abacus-calculator` and `abacus-cli`): the operator set, validated
//! digits, discrete input events and the calculator state record.

#![deny(warnings)]
#![deny(missing_docs)]

mod types;
pub use types::{CalculatorState, Digit, InputEvent, Operator};
