//! The calculator transition function.
//!
//! Every action has a defined outcome, including explicit no-ops, so the
//! reducer is total; it never fails and never mutates its input. Division
//! by zero is the evaluator's concern and stays out of this layer.

use super::evaluation::evaluate;
use super::state::{CalculatorAction, CalculatorState, FEINER_SAND, Operator};

/// Apply one action to a state, producing the next state.
pub fn reduce(state: &CalculatorState, action: CalculatorAction) -> CalculatorState {
    match action {
        CalculatorAction::AddDigit(digit) => add_digit(state, digit),
        CalculatorAction::ChooseOperation(op) => choose_operation(state, op),
        CalculatorAction::Evaluate => evaluate_pending(state),
        CalculatorAction::Clear => CalculatorState::default(),
        CalculatorAction::Delete => delete_last(state),
    }
}

fn add_digit(state: &CalculatorState, digit: char) -> CalculatorState {
    // The keymap only produces digits and '.', but the reducer stays total
    // for arbitrary action values.
    if !digit.is_ascii_digit() && digit != '.' {
        return state.clone();
    }

    // A fresh operand replaces whatever is on screen: the initial zero, a
    // computed result, or a sentinel.
    if state.overwrite {
        return CalculatorState {
            current_value: if digit == '.' {
                "0.".to_string()
            } else {
                digit.to_string()
            },
            overwrite: false,
            ..state.clone()
        };
    }

    // Reject a duplicate leading zero.
    if digit == '0' && state.current_value == "0" {
        return state.clone();
    }

    // Reject a second decimal point.
    if digit == '.' && state.current_value.contains('.') {
        return state.clone();
    }

    let mut current_value = state.current_value.clone();
    current_value.push(digit);
    CalculatorState {
        current_value,
        ..state.clone()
    }
}

fn choose_operation(state: &CalculatorState, op: Operator) -> CalculatorState {
    // Nothing entered yet, nothing to operate on.
    if state.current_value == "0" && state.previous_value.is_empty() {
        return state.clone();
    }

    // Operator chosen but no new digit typed: the user is changing their
    // mind about the operator. Operands stay untouched.
    if !state.previous_value.is_empty() && state.operation.is_some() && state.overwrite {
        return CalculatorState {
            operation: Some(op),
            ..state.clone()
        };
    }

    // First operator after the initial operand.
    if state.previous_value.is_empty() {
        return CalculatorState {
            previous_value: state.current_value.clone(),
            operation: Some(op),
            current_value: "0".to_string(),
            overwrite: true,
        };
    }

    // Chained operation: resolve the pending one left-to-right, then hold
    // the new operator. No precedence: 2 + 3 × 4 evaluates as (2 + 3) × 4.
    CalculatorState {
        previous_value: evaluate(&state.previous_value, &state.current_value, state.operation),
        operation: Some(op),
        current_value: "0".to_string(),
        overwrite: true,
    }
}

fn evaluate_pending(state: &CalculatorState) -> CalculatorState {
    if state.operation.is_none() || state.previous_value.is_empty() || state.current_value == "0" {
        return state.clone();
    }

    // 7 × 7 gets its dedicated answer.
    if state.operation == Some(Operator::Multiply)
        && parses_to_seven(&state.previous_value)
        && parses_to_seven(&state.current_value)
    {
        return CalculatorState {
            current_value: FEINER_SAND.to_string(),
            previous_value: String::new(),
            operation: None,
            overwrite: true,
        };
    }

    CalculatorState {
        current_value: evaluate(&state.previous_value, &state.current_value, state.operation),
        previous_value: String::new(),
        operation: None,
        overwrite: true,
    }
}

fn parses_to_seven(value: &str) -> bool {
    matches!(value.parse::<f64>(), Ok(n) if n == 7.0)
}

fn delete_last(state: &CalculatorState) -> CalculatorState {
    // Nothing user-typed to erase.
    if state.overwrite {
        return state.clone();
    }

    if state.current_value.len() == 1 {
        return CalculatorState {
            current_value: "0".to_string(),
            overwrite: true,
            ..state.clone()
        };
    }

    let mut current_value = state.current_value.clone();
    current_value.pop();
    CalculatorState {
        current_value,
        ..state.clone()
    }
}
