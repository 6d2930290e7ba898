//! Calculator state and action vocabulary.

use std::fmt;

/// Display text shown when dividing by zero.
pub const DIVISION_ERROR: &str = "Error";

/// Display text for the `7 × 7` easter egg.
pub const FEINER_SAND: &str = "Feiner Sand!";

/// A binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The display symbol (`+`, `-`, `×`, `÷`).
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// Parse from either the display symbol or the ASCII keyboard form
    /// (`*` for `×`, `/` for `÷`).
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "×" | "*" => Some(Self::Multiply),
            "÷" | "/" => Some(Self::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A discrete user action consumed by [`reduce`](super::reduce).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalculatorAction {
    /// A digit `0`-`9` or the decimal point.
    AddDigit(char),
    /// Select (or replace) the pending binary operator.
    ChooseOperation(Operator),
    /// Resolve the pending operation.
    Evaluate,
    /// Reset to the initial state.
    Clear,
    /// Erase the last typed character.
    Delete,
}

/// Complete calculator state.
///
/// This is a Moore machine: the displayed output is fully determined by the
/// state value, and every action produces a brand-new value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalculatorState {
    /// The operand being typed, or the last computed result. Always a
    /// non-empty numeral string with at most one `.`, or one of the
    /// sentinels ([`DIVISION_ERROR`], [`FEINER_SAND`]).
    pub current_value: String,
    /// The left-hand operand once an operator is chosen; empty while no
    /// operation is pending.
    pub previous_value: String,
    /// The pending operator. Absent implies `previous_value` is empty.
    pub operation: Option<Operator>,
    /// When set, the next digit replaces `current_value` instead of
    /// appending to it.
    pub overwrite: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            current_value: "0".to_string(),
            previous_value: String::new(),
            operation: None,
            overwrite: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = CalculatorState::default();
        assert_eq!(state.current_value, "0");
        assert_eq!(state.previous_value, "");
        assert_eq!(state.operation, None);
        assert!(state.overwrite);
    }

    #[test]
    fn test_operator_symbols() {
        assert_eq!(Operator::Add.to_string(), "+");
        assert_eq!(Operator::Subtract.to_string(), "-");
        assert_eq!(Operator::Multiply.to_string(), "×");
        assert_eq!(Operator::Divide.to_string(), "÷");
    }

    #[test]
    fn test_operator_from_key() {
        assert_eq!(Operator::from_key("+"), Some(Operator::Add));
        assert_eq!(Operator::from_key("*"), Some(Operator::Multiply));
        assert_eq!(Operator::from_key("×"), Some(Operator::Multiply));
        assert_eq!(Operator::from_key("/"), Some(Operator::Divide));
        assert_eq!(Operator::from_key("÷"), Some(Operator::Divide));
        assert_eq!(Operator::from_key("%"), None);
        assert_eq!(Operator::from_key(""), None);
    }
}
