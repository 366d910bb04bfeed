//! Pure reducer function for state transitions
//!
//! The reducer is a pure function: `(State, Action) -> State`.
//! All terminal I/O happens outside the reducer.

use super::actions::{Action, FocusMove};
use super::keypad;
use super::state::{AppState, StatusBarState};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libabacus::{apply_intent, Intent};

/// Pure reducer function
///
/// Takes current state and an action, returns new state.
/// No I/O, deterministic.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        // === UI Events ===
        Action::Key(key) => handle_key(state, key),
        Action::Mouse(_) => state,
        Action::Tick => state,
        Action::Resize(_, _) => state,

        // === Application ===
        Action::Quit => AppState {
            should_quit: true,
            ..state
        },

        Action::ToggleMouse => {
            let mouse_enabled = !state.mouse_enabled;
            let message = if mouse_enabled {
                "Mouse enabled: click a key to press it"
            } else {
                "Mouse disabled"
            };
            reduce(
                AppState {
                    mouse_enabled,
                    ..state
                },
                Action::SetStatus(message.to_string()),
            )
        }

        Action::ShowHelp => AppState {
            help_visible: true,
            ..state
        },

        Action::HideHelp => AppState {
            help_visible: false,
            ..state
        },

        // === Calculator ===
        Action::Press(intent) => press(state, intent),

        Action::MoveFocus(direction) => AppState {
            focus: move_focus(state.focus, direction),
            ..state
        },

        Action::PressFocused => {
            let (row, col) = state.focus;
            reduce(state, Action::PressCell { row, col })
        }

        Action::PressCell { row, col } => match keypad::intent_at(row, col) {
            Some(intent) => press(state, intent),
            None => state,
        },

        // === Status Bar ===
        Action::SetStatus(message) => AppState {
            status: StatusBarState {
                message: Some(message),
            },
            ..state
        },

        Action::ClearStatus => AppState {
            status: StatusBarState::default(),
            ..state
        },
    }
}

/// Feed one intent to the engine; focus follows the key pressed
fn press(state: AppState, intent: Intent) -> AppState {
    let focus = keypad::position_of(&intent).unwrap_or(state.focus);
    let pressed = AppState {
        calculator: apply_intent(state.calculator, intent),
        focus,
        ..state
    };
    reduce(pressed, Action::ClearStatus)
}

fn move_focus((row, col): (usize, usize), direction: FocusMove) -> (usize, usize) {
    match direction {
        FocusMove::Up => (row.saturating_sub(1), col),
        FocusMove::Down => ((row + 1).min(keypad::ROWS - 1), col),
        FocusMove::Left => (row, col.saturating_sub(1)),
        FocusMove::Right => (row, (col + 1).min(keypad::COLS - 1)),
    }
}

/// Handle keyboard input
///
/// Maps keys to high-level actions. This is where keybindings are defined.
fn handle_key(state: AppState, key: KeyEvent) -> AppState {
    // Global keybindings (work everywhere)
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => {
            return reduce(state, Action::Quit);
        }
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            return reduce(state, Action::Quit);
        }
        (KeyCode::F(1), _) => {
            let action = if state.help_visible { Action::HideHelp } else { Action::ShowHelp };
            return reduce(state, action);
        }
        (KeyCode::Esc, _) if state.help_visible => {
            return reduce(state, Action::HideHelp);
        }
        (KeyCode::Char('m'), KeyModifiers::NONE) => {
            return reduce(state, Action::ToggleMouse);
        }
        _ => {}
    }

    // Help overlay swallows everything else
    if state.help_visible {
        return state;
    }

    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return state;
    }

    let action = match key.code {
        KeyCode::Enter => Action::Press(Intent::Equals),
        KeyCode::Backspace => Action::Press(Intent::Backspace),
        KeyCode::Delete => Action::Press(Intent::Clear),
        KeyCode::Up => Action::MoveFocus(FocusMove::Up),
        KeyCode::Down => Action::MoveFocus(FocusMove::Down),
        KeyCode::Left => Action::MoveFocus(FocusMove::Left),
        KeyCode::Right => Action::MoveFocus(FocusMove::Right),
        KeyCode::Char(' ') => Action::PressFocused,
        KeyCode::Char(c) => match char_intent(c) {
            Some(intent) => Action::Press(intent),
            None => return state,
        },
        _ => return state,
    };

    reduce(state, action)
}

/// Intent for a typed character
fn char_intent(c: char) -> Option<Intent> {
    match c {
        's' | 'S' => Some(Intent::SquareRoot),
        '~' => Some(Intent::ToggleSign),
        other => other.to_string().parse().ok(),
    }
}
