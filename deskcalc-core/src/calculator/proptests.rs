//! Property-based tests for the state machine
//!
//! These tests check that the state invariants hold for any sequence of
//! inputs.

use std::convert::TryFrom;

use proptest::prelude::*;

use super::*;

fn arb_digit() -> impl Strategy<Value = Digit> {
    prop::sample::select("0123456789.".chars().collect::<Vec<_>>())
        .prop_map(|c| Digit::try_from(c).unwrap())
}

fn arb_operator() -> impl Strategy<Value = Operator> {
    prop::sample::select("+-*/()".chars().collect::<Vec<_>>())
        .prop_map(|c| Operator::try_from(c).unwrap())
}

fn arb_function() -> impl Strategy<Value = UnaryFunction> {
    prop_oneof![
        Just(UnaryFunction::Sin),
        Just(UnaryFunction::Cos),
        Just(UnaryFunction::Tan),
        Just(UnaryFunction::Log10),
        Just(UnaryFunction::Ln),
        Just(UnaryFunction::Sqrt),
    ]
}

fn arb_memory_op() -> impl Strategy<Value = MemoryOp> {
    prop_oneof![
        Just(MemoryOp::Clear),
        Just(MemoryOp::Recall),
        Just(MemoryOp::Add),
        Just(MemoryOp::Subtract),
        Just(MemoryOp::Store),
    ]
}

fn arb_input() -> impl Strategy<Value = Input> {
    prop_oneof![
        4 => arb_digit().prop_map(Input::Digit),
        3 => arb_operator().prop_map(Input::Operator),
        2 => Just(Input::Equals),
        1 => Just(Input::Clear),
        1 => Just(Input::Escape),
        1 => arb_function().prop_map(Input::Function),
        1 => arb_memory_op().prop_map(Input::Memory),
    ]
}

fn check_invariants(state: &CalculatorState) -> Result<(), TestCaseError> {
    prop_assert!(!state.display().is_empty());
    prop_assert!(state.history().len() <= HISTORY_CAPACITY);
    prop_assert!(state.memory().is_finite());
    prop_assert_eq!(state.is_error(), state.display() == ERROR_DISPLAY);
    if !state.is_error() {
        // never NaN, inf or anything else that is not a number
        let val = state.display_value();
        prop_assert!(val.map_or(false, f64::is_finite), "display {:?}", state.display());
    }
    prop_assert!(!state.expression().contains(ERROR_DISPLAY));
    Ok(())
}

proptest! {
    #[test]
    fn invariants_hold_for_any_input_sequence(inputs in prop::collection::vec(arb_input(), 0..64)) {
        let mut state = CalculatorState::new();
        check_invariants(&state)?;
        for input in inputs {
            state = state.apply(input);
            check_invariants(&state)?;
        }
    }

    #[test]
    fn transitions_are_deterministic(inputs in prop::collection::vec(arb_input(), 0..32)) {
        let a = inputs.iter().fold(CalculatorState::new(), |s, i| s.apply(*i));
        let b = inputs.iter().fold(CalculatorState::new(), |s, i| s.apply(*i));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn clear_keeps_memory_and_history(inputs in prop::collection::vec(arb_input(), 0..32)) {
        let state = inputs.iter().fold(CalculatorState::new(), |s, i| s.apply(*i));
        let cleared = state.clear();
        prop_assert_eq!(cleared.display(), "0");
        prop_assert_eq!(cleared.expression(), "");
        prop_assert_eq!(cleared.memory(), state.memory());
        prop_assert_eq!(cleared.history(), state.history());
        prop_assert_eq!(state.escape(), cleared);
    }

    #[test]
    fn failed_evaluations_change_nothing_but_the_display(inputs in prop::collection::vec(arb_input(), 0..32)) {
        let state = inputs.iter().fold(CalculatorState::new(), |s, i| s.apply(*i));
        let next = state.apply_equals();
        if next.is_error() {
            prop_assert_eq!(next.expression(), state.expression());
            prop_assert_eq!(next.history(), state.history());
            prop_assert_eq!(next.memory(), state.memory());
        } else {
            prop_assert_eq!(next.expression(), "");
            prop_assert_eq!(next.history()[0].result.as_str(), next.display());
        }
    }

    #[test]
    fn a_digit_leaves_the_error_state(inputs in prop::collection::vec(arb_input(), 0..32), digit in arb_digit()) {
        let state = inputs.iter().fold(CalculatorState::new(), |s, i| s.apply(*i));
        let next = state.apply_digit(digit);
        prop_assert!(!next.is_error());
        if state.is_error() {
            let expected = if digit.is_point() { "0.".to_string() } else { digit.as_char().to_string() };
            prop_assert_eq!(next.display(), expected.as_str());
            prop_assert_eq!(next.expression(), "");
        }
    }
}
