//! Emission error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmitError {
    #[error("Incomplete table: expected {expected} entries, got {got}")]
    IncompleteTable { expected: u64, got: u64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EmitError>;
