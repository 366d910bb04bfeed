//! Calculator engine
//!
//! A pure state machine: `(CalculatorState, Intent) -> CalculatorState`.
//!
//! The display string is both the live input buffer and the place results
//! are written to. Operands are captured from it when an operator or equals
//! is pressed; anything that does not parse is captured as zero.

use serde::Serialize;
use tracing::debug;

use crate::error::ArithmeticError;
use crate::types::{Digit, ErrorEntry, Intent, Operator};

/// Display token shown after a failed evaluation.
pub const ERROR_TOKEN: &str = "Error";

const INITIAL_DISPLAY: &str = "0";

/// The single calculator session value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatorState {
    display: String,
    pending_operator: Option<Operator>,
    operand1: f64,
    operand2: f64,
    #[serde(skip)]
    error_entry: ErrorEntry,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::with_error_entry(ErrorEntry::default())
    }
}

impl CalculatorState {
    /// Fresh session showing `"0"`
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh session with a specific policy for editing the error token
    pub fn with_error_entry(error_entry: ErrorEntry) -> Self {
        Self {
            display: INITIAL_DISPLAY.to_string(),
            pending_operator: None,
            operand1: 0.0,
            operand2: 0.0,
            error_entry,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    pub fn operand1(&self) -> f64 {
        self.operand1
    }

    pub fn operand2(&self) -> f64 {
        self.operand2
    }

    pub fn error_entry(&self) -> ErrorEntry {
        self.error_entry
    }

    /// Whether the display currently holds the error token
    pub fn is_error(&self) -> bool {
        self.display == ERROR_TOKEN
    }

    fn treats_error_as_zero(&self) -> bool {
        self.error_entry == ErrorEntry::Replace && self.is_error()
    }
}

/// Apply one intent and return the next state.
///
/// Never fails: arithmetic failures become the `"Error"` display.
pub fn apply_intent(mut state: CalculatorState, intent: Intent) -> CalculatorState {
    match intent {
        Intent::Digit(digit) => append_digit(&mut state, digit),
        Intent::Operator(op) => choose_operator(&mut state, op),
        Intent::SquareRoot => choose_operator(&mut state, Operator::SquareRoot),
        Intent::Equals => calculate_result(&mut state),
        Intent::Clear => state = CalculatorState::with_error_entry(state.error_entry),
        Intent::Backspace => backspace(&mut state),
        Intent::ToggleSign => toggle_sign(&mut state),
    }
    state
}

/// Read-only projection for rendering
pub fn current_display(state: &CalculatorState) -> &str {
    state.display()
}

fn append_digit(state: &mut CalculatorState, digit: Digit) {
    if state.display == INITIAL_DISPLAY || state.treats_error_as_zero() {
        state.display = digit.to_string();
    } else {
        state.display.push(digit.as_char());
    }
}

fn choose_operator(state: &mut CalculatorState, op: Operator) {
    state.operand1 = parse_display(&state.display);
    state.pending_operator = Some(op);
    state.display = INITIAL_DISPLAY.to_string();
}

fn calculate_result(state: &mut CalculatorState) {
    state.operand2 = parse_display(&state.display);

    let Some(op) = state.pending_operator.take() else {
        return;
    };

    state.display = match evaluate(op, state.operand1, state.operand2) {
        Ok(value) => {
            debug!(
                "Evaluated {} {} {} = {}",
                state.operand1, op, state.operand2, value
            );
            format_number(value)
        }
        Err(e) => {
            debug!("Evaluation of {} failed: {}", op, e);
            ERROR_TOKEN.to_string()
        }
    };
}

fn backspace(state: &mut CalculatorState) {
    if state.treats_error_as_zero() || state.display.chars().count() <= 1 {
        state.display = INITIAL_DISPLAY.to_string();
        return;
    }

    state.display.pop();
    if state.display == "-" {
        state.display = INITIAL_DISPLAY.to_string();
    }
}

fn toggle_sign(state: &mut CalculatorState) {
    state.display = match state.display.parse::<f64>() {
        Ok(value) if value.is_finite() => format_number(-value),
        _ => ERROR_TOKEN.to_string(),
    };
}

/// Evaluate `op` over the captured operands.
///
/// `operand2` is ignored for [`Operator::SquareRoot`].
pub fn evaluate(op: Operator, operand1: f64, operand2: f64) -> Result<f64, ArithmeticError> {
    let value = match op {
        Operator::Add => operand1 + operand2,
        Operator::Subtract => operand1 - operand2,
        Operator::Multiply => operand1 * operand2,
        Operator::Divide => {
            if operand2 == 0.0 {
                return Err(ArithmeticError::DivisionByZero);
            }
            operand1 / operand2
        }
        Operator::SquareRoot => {
            if operand1 < 0.0 {
                return Err(ArithmeticError::NegativeSquareRoot);
            }
            operand1.sqrt()
        }
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(ArithmeticError::NonFinite)
    }
}

/// Parse display text into an operand; anything unparseable is zero.
pub fn parse_display(display: &str) -> f64 {
    display
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Native float-to-string conversion (`8.0` renders as `"8"`).
pub fn format_number(value: f64) -> String {
    value.to_string()
}
