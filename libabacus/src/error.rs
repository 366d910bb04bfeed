//! Error types for Abacus

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AbacusError>;

#[derive(Error, Debug)]
pub enum AbacusError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AbacusError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            AbacusError::InvalidInput(_) => 3,
            AbacusError::Config(_) => 1,
            AbacusError::Io(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[source] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

/// Arithmetic failures raised while evaluating a pending operator.
///
/// These never leave the engine: every variant is rendered as the
/// `"Error"` display token.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Square root of a negative number")]
    NegativeSquareRoot,

    #[error("Result is not a finite number")]
    NonFinite,
}
