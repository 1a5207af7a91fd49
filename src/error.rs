//! Error types for the ATM simulation.
//!
//! Authentication failures, invalid amounts, insufficient funds, and
//! unrecognized menu choices are all handled locally by re-prompting and are
//! never surfaced here. Only malformed numeric input and input-stream
//! failures terminate the program.

use thiserror::Error;

/// Result type alias for ATM operations
pub type Result<T> = std::result::Result<T, AtmError>;

/// Fatal errors that end the session.
#[derive(Error, Debug)]
pub enum AtmError {
    /// Failed to read from or write to the terminal
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Non-numeric input where a menu choice or amount was expected
    #[error("expected a number, got '{input}'")]
    MalformedNumber { input: String },

    /// The input stream ended while a line was still expected
    #[error("input ended unexpectedly")]
    UnexpectedEof,
}
