//! Display formatting.
//!
//! Turns a raw state value into what the display shows: numeral strings get
//! thousand separators on their integer part, sentinel text passes through
//! untouched.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches a plain numeral string: optional sign, integer digits, and
    /// an optional decimal part. The decimal part may be empty so that a
    /// value the user is still typing (`"12."`) is recognized.
    static ref NUMERAL: Regex = Regex::new(r"^-?\d+(\.\d*)?$").unwrap();
}

/// Format a value for the display.
///
/// Anything that is not a plain numeral passes through unchanged, which
/// covers the sentinel strings. Numerals get their integer part grouped
/// with commas; the decimal part, including a trailing lone `.`, is kept
/// exactly as typed.
pub fn format_display_value(value: &str) -> String {
    if !NUMERAL.is_match(value) {
        return value.to_string();
    }

    match value.split_once('.') {
        Some((integer, decimal)) => format!("{}.{}", group_thousands(integer), decimal),
        None => group_thousands(value),
    }
}

/// Insert a comma every three digits, counting from the right.
///
/// Works on the digit string directly so integer parts beyond the range of
/// any machine integer still group correctly. Accepts an optional leading
/// `-`.
fn group_thousands(integer: &str) -> String {
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    let mut reversed = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            reversed.push(',');
        }
        reversed.push(c);
    }

    let grouped: String = reversed.chars().rev().collect();
    format!("{}{}", sign, grouped)
}
