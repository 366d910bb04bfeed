//! Error types for abacus-tui
//!
//! Wraps engine/config errors and terminal IO errors for unified
//! error handling.

use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// Library error (configuration, input)
    #[error("Abacus error: {0}")]
    Abacus(#[from] libabacus::AbacusError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;
