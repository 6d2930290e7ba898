//! Arithmetic for the pending binary operation.
//!
//! Operands arrive as the numeral strings the user typed; results go back
//! as strings ready for the display layer. Faults stay in-band: division by
//! zero yields the [`DIVISION_ERROR`] sentinel and unparsable operands fall
//! back to `"0"` rather than surfacing NaN or infinity.

use super::state::{DIVISION_ERROR, Operator};

/// Evaluate `prev <operation> current`.
///
/// Returns `"0"` when either operand fails to parse or no operation is
/// given. Both cases are unreachable through the reducer and exist as
/// fallbacks for direct callers.
pub fn evaluate(prev: &str, current: &str, operation: Option<Operator>) -> String {
    let (Ok(lhs), Ok(rhs)) = (prev.parse::<f64>(), current.parse::<f64>()) else {
        return "0".to_string();
    };

    let Some(operation) = operation else {
        return "0".to_string();
    };

    let result = match operation {
        Operator::Add => lhs + rhs,
        Operator::Subtract => lhs - rhs,
        Operator::Multiply => lhs * rhs,
        Operator::Divide => {
            if rhs == 0.0 {
                return DIVISION_ERROR.to_string();
            }
            lhs / rhs
        }
    };

    format_number(result)
}

/// Render a result as the shortest exact decimal string.
///
/// Rounds to 10 decimal places first to suppress binary floating point
/// artifacts (`0.1 + 0.2` must come out as `0.3`), then strips trailing
/// zeros and a dangling decimal point.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }

    let formatted = format!("{:.10}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');

    // A magnitude below the rounding threshold trims down to nothing.
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
