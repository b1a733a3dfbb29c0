use abacus_calculator::{CalculatorEngine, CalculatorState, Digit, InputEvent, Operator};
use proptest::prelude::*;

fn digit_strategy() -> impl Strategy<Value = Digit> {
    (0u8..=9).prop_map(|d| Digit::new(d).unwrap())
}

fn operator_strategy() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
        Just(Operator::Divide),
    ]
}

fn event_strategy() -> impl Strategy<Value = InputEvent> {
    prop_oneof![
        4 => digit_strategy().prop_map(InputEvent::Digit),
        2 => operator_strategy().prop_map(InputEvent::Operator),
        1 => Just(InputEvent::Equals),
        1 => Just(InputEvent::Clear),
        1 => Just(InputEvent::DecimalPoint),
    ]
}

/// Expected operand after typing `digits` on a fresh calculator.
fn expected_operand(digits: &[Digit]) -> String {
    let mut operand = String::from("0");
    for digit in digits {
        if operand == "0" {
            operand = digit.to_string();
        } else {
            operand.push(digit.as_char());
        }
    }
    operand
}

proptest! {
    #[test]
    fn typed_digits_concatenate(digits in prop::collection::vec(digit_strategy(), 0..30)) {
        let mut engine = CalculatorEngine::new();
        for digit in &digits {
            engine.press_digit(*digit);
        }
        prop_assert_eq!(&engine.state().current_input, &expected_operand(&digits));
    }

    #[test]
    fn clear_always_restores_initial_state(events in prop::collection::vec(event_strategy(), 0..40)) {
        let mut engine = CalculatorEngine::new();
        for event in events {
            let _ = engine.apply(event);
        }
        engine.press_clear();
        prop_assert_eq!(engine.state(), &CalculatorState::initial());
    }

    #[test]
    fn operand_is_never_empty_and_has_one_point_at_most(
        events in prop::collection::vec(event_strategy(), 0..60)
    ) {
        let mut engine = CalculatorEngine::new();
        for event in events {
            let _ = engine.apply(event);
            let operand = &engine.state().current_input;
            prop_assert!(!operand.is_empty());
            prop_assert!(operand.matches('.').count() <= 1);
        }
    }

    #[test]
    fn decimal_point_is_idempotent(events in prop::collection::vec(event_strategy(), 0..30)) {
        let mut engine = CalculatorEngine::new();
        for event in events {
            let _ = engine.apply(event);
        }
        engine.press_decimal_point();
        let once = engine.state().clone();
        engine.press_decimal_point();
        prop_assert_eq!(engine.state(), &once);
        prop_assert_eq!(once.current_input.matches('.').count(), 1);
    }

    #[test]
    fn display_never_exceeds_width_for_typed_operands(
        digits in prop::collection::vec(digit_strategy(), 1..40),
        with_point in any::<bool>(),
    ) {
        let mut engine = CalculatorEngine::new();
        if with_point {
            engine.press_decimal_point();
        }
        for digit in digits {
            engine.press_digit(digit);
        }
        prop_assert!(engine.display().chars().count() <= 12);
    }
}
