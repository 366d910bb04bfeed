//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. This module defines
//! all possible actions that can modify application state.

use crossterm::event::{KeyEvent, MouseEvent};
use libabacus::Intent;

/// Actions that trigger state transitions
///
/// Actions are plain data describing what should happen. The reducer
/// (see `reducer.rs`) is responsible for applying actions to state.
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event
    Key(KeyEvent),

    /// Mouse input event (hit-testing happens in the event loop)
    Mouse(MouseEvent),

    /// Periodic tick
    Tick,

    /// Terminal resize event
    Resize(u16, u16),

    // === Application ===
    /// Quit the application
    Quit,

    /// Toggle mouse capture on/off
    ToggleMouse,

    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,

    // === Calculator ===
    /// Feed an intent to the calculator engine
    Press(Intent),

    /// Move the keypad focus cursor
    MoveFocus(FocusMove),

    /// Press the key under the focus cursor
    PressFocused,

    /// Press the key at a keypad cell (mouse click)
    PressCell { row: usize, col: usize },

    // === Status Bar ===
    /// Update status message
    SetStatus(String),

    /// Clear status message
    ClearStatus,
}

/// Direction for the keypad focus cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMove {
    Up,
    Down,
    Left,
    Right,
}
