//! Crate-level error type and `Result` alias for structured error handling.
//! Converts underlying I/O and CEOS framing errors, and provides semantic
//! variants for configuration and argument validation. Recipe mismatches are
//! not errors: resolution reports them as `None`.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CEOS container error: {0}")]
    Container(#[from] crate::io::ContainerError),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Invalid config {path}: {reason}")]
    Config { path: String, reason: String },

    #[error("Unknown recipe: {0}")]
    UnknownRecipe(String),

    #[error("No imagery file found in product: {0}")]
    MissingImagery(String),
}
