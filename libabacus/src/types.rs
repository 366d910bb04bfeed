//! Core types for Abacus

use serde::{Deserialize, Serialize};

use crate::error::{AbacusError, Result};

/// Operator awaiting evaluation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    SquareRoot,
}

impl Operator {
    /// Keypad glyph for this operator
    pub fn label(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::SquareRoot => "√",
        }
    }

    /// Whether the operator takes a right-hand operand
    pub fn is_binary(&self) -> bool {
        !matches!(self, Self::SquareRoot)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single input character: `0`-`9` or the decimal point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digit(char);

impl Digit {
    pub const POINT: Digit = Digit('.');

    pub fn as_char(&self) -> char {
        self.0
    }
}

impl TryFrom<char> for Digit {
    type Error = AbacusError;

    fn try_from(c: char) -> Result<Self> {
        if c.is_ascii_digit() || c == '.' {
            Ok(Digit(c))
        } else {
            Err(AbacusError::InvalidInput(format!(
                "'{}' is not a digit or decimal point",
                c
            )))
        }
    }
}

impl std::fmt::Display for Digit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A discrete user action fed to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Digit(Digit),
    Operator(Operator),
    SquareRoot,
    Equals,
    Clear,
    Backspace,
    ToggleSign,
}

impl Intent {
    /// Keypad glyph for this intent
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Operator(op) => op.label().to_string(),
            Self::SquareRoot => "√".to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::Backspace => "←".to_string(),
            Self::ToggleSign => "±".to_string(),
        }
    }
}

/// How editing intents treat the `"Error"` display.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorEntry {
    /// `"Error"` behaves like `"0"`: digits replace it, backspace clears it.
    #[default]
    Replace,
    /// `"Error"` is edited like any other string (`"Error5"`, `"Erro"`).
    Literal,
}

impl std::str::FromStr for ErrorEntry {
    type Err = AbacusError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "replace" => Ok(Self::Replace),
            "literal" => Ok(Self::Literal),
            _ => Err(AbacusError::InvalidInput(format!(
                "Invalid error entry mode: '{}'. Valid options: replace, literal",
                s
            ))),
        }
    }
}
