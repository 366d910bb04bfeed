//! Textual intent vocabulary
//!
//! Maps keypad glyphs and short words onto [`Intent`] values so that
//! keyboards, scripts, and pipes can drive the engine the same way the
//! keypad does.

use std::str::FromStr;

use crate::error::{AbacusError, Result};
use crate::types::{Digit, Intent, Operator};

impl FromStr for Intent {
    type Err = AbacusError;

    fn from_str(token: &str) -> Result<Self> {
        let mut chars = token.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Ok(digit) = Digit::try_from(c) {
                return Ok(Intent::Digit(digit));
            }
        }

        let intent = match token.to_lowercase().as_str() {
            "+" => Intent::Operator(Operator::Add),
            "-" | "−" => Intent::Operator(Operator::Subtract),
            "*" | "x" | "×" => Intent::Operator(Operator::Multiply),
            "/" | "÷" => Intent::Operator(Operator::Divide),
            "√" | "r" | "sqrt" => Intent::SquareRoot,
            "=" => Intent::Equals,
            "c" | "clear" => Intent::Clear,
            "←" | "bs" | "back" | "backspace" => Intent::Backspace,
            "±" | "n" | "neg" => Intent::ToggleSign,
            _ => {
                return Err(AbacusError::InvalidInput(format!(
                    "unknown token '{}'",
                    token
                )))
            }
        };

        Ok(intent)
    }
}

/// Parse whitespace-separated tokens into intents.
///
/// A token made only of digits and decimal points expands into one
/// `Digit` intent per character, so `"12.5 + 3 ="` is six digits,
/// an operator, and equals.
pub fn parse_tokens(input: &str) -> Result<Vec<Intent>> {
    let mut intents = Vec::new();

    for token in input.split_whitespace() {
        if token.chars().all(|c| c.is_ascii_digit() || c == '.') {
            for c in token.chars() {
                intents.push(Intent::Digit(Digit::try_from(c)?));
            }
        } else {
            intents.push(token.parse()?);
        }
    }

    Ok(intents)
}
