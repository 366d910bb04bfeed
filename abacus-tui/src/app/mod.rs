//! Application module
//!
//! - Actions: What can happen
//! - State: What is true right now
//! - Reducer: Pure function (State, Action) -> State
//! - Keypad: The button grid shared by input and rendering

pub mod actions;
pub mod event;
pub mod keypad;
pub mod reducer;
pub mod state;

// Re-export commonly used types
pub use actions::{Action, FocusMove};
pub use reducer::reduce;
pub use state::{AppState, StatusBarState, UiConfig};
