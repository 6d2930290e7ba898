//! Key identifier to action mapping.

use crate::calculator::{CalculatorAction, Operator};

/// Map a key identifier to the action it triggers.
///
/// Returns `None` for keys the calculator does not handle. `Some` means the
/// key was consumed and the host should suppress its default behavior.
pub fn action_for_key(key: &str) -> Option<CalculatorAction> {
    // Digits and the decimal point arrive as single characters.
    if let [c] = key.as_bytes()
        && (c.is_ascii_digit() || *c == b'.')
    {
        return Some(CalculatorAction::AddDigit(*c as char));
    }

    match key {
        "+" | "-" | "*" | "/" => Operator::from_key(key).map(CalculatorAction::ChooseOperation),
        "Enter" | "=" => Some(CalculatorAction::Evaluate),
        "Escape" => Some(CalculatorAction::Clear),
        "Backspace" | "Delete" => Some(CalculatorAction::Delete),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_keys() {
        for digit in '0'..='9' {
            assert_eq!(
                action_for_key(&digit.to_string()),
                Some(CalculatorAction::AddDigit(digit))
            );
        }
        assert_eq!(action_for_key("."), Some(CalculatorAction::AddDigit('.')));
    }

    #[test]
    fn test_operator_keys() {
        assert_eq!(
            action_for_key("+"),
            Some(CalculatorAction::ChooseOperation(Operator::Add))
        );
        assert_eq!(
            action_for_key("-"),
            Some(CalculatorAction::ChooseOperation(Operator::Subtract))
        );
        // ASCII forms map onto the display operators.
        assert_eq!(
            action_for_key("*"),
            Some(CalculatorAction::ChooseOperation(Operator::Multiply))
        );
        assert_eq!(
            action_for_key("/"),
            Some(CalculatorAction::ChooseOperation(Operator::Divide))
        );
    }

    #[test]
    fn test_evaluate_keys() {
        assert_eq!(action_for_key("Enter"), Some(CalculatorAction::Evaluate));
        assert_eq!(action_for_key("="), Some(CalculatorAction::Evaluate));
    }

    #[test]
    fn test_clear_key() {
        assert_eq!(action_for_key("Escape"), Some(CalculatorAction::Clear));
    }

    #[test]
    fn test_erase_keys() {
        assert_eq!(action_for_key("Backspace"), Some(CalculatorAction::Delete));
        assert_eq!(action_for_key("Delete"), Some(CalculatorAction::Delete));
    }

    #[test]
    fn test_unrecognized_keys_are_ignored() {
        assert_eq!(action_for_key("a"), None);
        assert_eq!(action_for_key("F1"), None);
        assert_eq!(action_for_key("Tab"), None);
        assert_eq!(action_for_key(" "), None);
        assert_eq!(action_for_key(""), None);
    }
}
