//! Abacus - a keypad calculator engine
//!
//! This library provides the calculator state machine shared by the
//! Abacus front ends, along with their configuration and logging setup.

pub mod config;
pub mod engine;
pub mod error;
pub mod intent;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use engine::{apply_intent, current_display, CalculatorState, ERROR_TOKEN};
pub use error::{AbacusError, ArithmeticError, Result};
pub use intent::parse_tokens;
pub use types::{Digit, ErrorEntry, Intent, Operator};
