use crate::arithmetic::evaluate_with_precision;
use crate::config::EngineConfig;
use crate::display::format_display;
use crate::error::{CalculatorError, CalculatorResult};
use crate::numeral::{format_number, parse_operand};
use abacus_types::{CalculatorState, Digit, InputEvent, Operator};
use tracing::{debug, instrument, warn};

/// Keypad calculator: owns the input state machine and renders the display
/// after every input.
///
/// Operators are evaluated strictly left to right. Pressing an operator while
/// another one is pending evaluates the pending one first, so `3 + 4 × 2 =`
/// yields `14`.
#[derive(Debug, Clone, Default)]
pub struct CalculatorEngine {
    state: CalculatorState,
    config: EngineConfig,
}

impl CalculatorEngine {
    /// Create an engine in the initial state with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine in the initial state with custom configuration
    pub fn with_config(config: EngineConfig) -> Self {
        Self { state: CalculatorState::initial(), config }
    }

    /// Read-only view of the current state
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Configuration the engine was created with
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Text currently shown on the display
    pub fn display(&self) -> String {
        format_display(&self.state.current_input, &self.config.display)
    }

    /// Dispatch a single input event
    pub fn apply(&mut self, event: InputEvent) -> CalculatorResult<String> {
        match event {
            InputEvent::Digit(digit) => Ok(self.press_digit(digit)),
            InputEvent::Operator(op) => self.press_operator(op),
            InputEvent::Equals => self.press_equals(),
            InputEvent::Clear => Ok(self.press_clear()),
            InputEvent::DecimalPoint => Ok(self.press_decimal_point()),
        }
    }

    /// Start a new operand with `digit`, or append it to the one being typed.
    #[instrument(level = "debug", skip(self))]
    pub fn press_digit(&mut self, digit: Digit) -> String {
        let state = &mut self.state;
        if state.should_reset_display || state.current_input == CalculatorState::INITIAL_INPUT {
            state.current_input = digit.to_string();
            state.should_reset_display = false;
        } else {
            state.current_input.push(digit.as_char());
        }

        debug!(current_input = %self.state.current_input, "Digit entered");
        self.display()
    }

    /// Set the pending operator, first evaluating any operation already pending.
    ///
    /// On division by zero the dividend becomes the intermediate result, the
    /// new operator is still installed and the error is returned.
    #[instrument(level = "debug", skip(self))]
    pub fn press_operator(&mut self, op: Operator) -> CalculatorResult<String> {
        let mut outcome = Ok(());

        if self.state.previous_input.is_none() {
            self.state.previous_input = Some(self.state.current_input.clone());
        } else if let Some(pending) = self.state.operation {
            let left = self.state.previous_input.as_deref().and_then(parse_operand).unwrap_or(0.0);
            let right = parse_operand(&self.state.current_input).unwrap_or(f64::NAN);
            let (result, error) = self.compute(left, right, pending);
            outcome = error.map_or(Ok(()), Err);

            let rendered = format_number(result);
            debug!(%pending, left, right, result = %rendered, "Chained operation evaluated");
            self.state.current_input = rendered.clone();
            self.state.previous_input = Some(rendered);
        }

        self.state.should_reset_display = true;
        self.state.operation = Some(op);

        outcome.map(|()| self.display())
    }

    /// Evaluate the pending operation.
    ///
    /// Does nothing when no operation is pending or an operand does not parse.
    #[instrument(level = "debug", skip(self))]
    pub fn press_equals(&mut self) -> CalculatorResult<String> {
        let Some(pending) = self.state.operation else {
            return Ok(self.display());
        };
        let left = self.state.previous_input.as_deref().and_then(parse_operand);
        let right = parse_operand(&self.state.current_input);
        let (Some(left), Some(right)) = (left, right) else {
            debug!("Equals ignored: operand does not parse");
            return Ok(self.display());
        };

        let (result, error) = self.compute(left, right, pending);
        let rendered = format_number(result);
        debug!(%pending, left, right, result = %rendered, "Operation evaluated");

        self.state.current_input = rendered;
        self.state.previous_input = None;
        self.state.operation = None;
        self.state.should_reset_display = true;

        match error {
            Some(err) => Err(err),
            None => Ok(self.display()),
        }
    }

    /// Return to the initial state.
    #[instrument(level = "debug", skip(self))]
    pub fn press_clear(&mut self) -> String {
        self.state = CalculatorState::initial();
        debug!("Calculator cleared");
        self.display()
    }

    /// Append a decimal point, starting a fresh `0.` operand after an operator or equals.
    #[instrument(level = "debug", skip(self))]
    pub fn press_decimal_point(&mut self) -> String {
        let state = &mut self.state;
        if state.should_reset_display {
            state.current_input = CalculatorState::INITIAL_INPUT.to_string();
            state.should_reset_display = false;
        }
        if !state.current_input.contains('.') {
            state.current_input.push('.');
        }

        self.display()
    }

    /// Run one arithmetic step. A zero divisor keeps the dividend as the result.
    fn compute(&self, left: f64, right: f64, op: Operator) -> (f64, Option<CalculatorError>) {
        match evaluate_with_precision(left, right, op, self.config.precision) {
            Ok(result) => (result, None),
            Err(err @ CalculatorError::DivisionByZero { dividend }) => {
                warn!(category = err.category(), dividend, "Division by zero, keeping dividend");
                (dividend, Some(err))
            }
        }
    }
}
