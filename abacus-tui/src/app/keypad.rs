//! Keypad layout
//!
//! Five rows of four keys. The top row holds the editing keys, the rest
//! form the usual digit block with operators down the right edge.

use libabacus::{Intent, Operator};

pub const ROWS: usize = 5;
pub const COLS: usize = 4;

const LAYOUT: [[&str; COLS]; ROWS] = [
    ["C", "←", "±", "√"],
    ["7", "8", "9", "/"],
    ["4", "5", "6", "*"],
    ["1", "2", "3", "-"],
    ["0", ".", "=", "+"],
];

/// Colour role of a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRole {
    Clear,
    Edit,
    Operator,
    Equals,
    Digit,
}

impl KeyRole {
    pub fn of(intent: &Intent) -> Self {
        match intent {
            Intent::Clear => KeyRole::Clear,
            Intent::Backspace | Intent::ToggleSign => KeyRole::Edit,
            Intent::Operator(_) | Intent::SquareRoot => KeyRole::Operator,
            Intent::Equals => KeyRole::Equals,
            Intent::Digit(_) => KeyRole::Digit,
        }
    }
}

/// Glyph printed on the key at `(row, col)`
pub fn label_at(row: usize, col: usize) -> Option<&'static str> {
    LAYOUT.get(row).and_then(|keys| keys.get(col)).copied()
}

/// Intent sent by the key at `(row, col)`
pub fn intent_at(row: usize, col: usize) -> Option<Intent> {
    label_at(row, col).and_then(|label| label.parse().ok())
}

/// Keypad cell carrying `intent`, if any
pub fn position_of(intent: &Intent) -> Option<(usize, usize)> {
    let target = match intent {
        Intent::Operator(Operator::SquareRoot) => Intent::SquareRoot,
        other => *other,
    };

    (0..ROWS)
        .flat_map(|row| (0..COLS).map(move |col| (row, col)))
        .find(|&(row, col)| intent_at(row, col) == Some(target))
}
