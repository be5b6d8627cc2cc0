//! Table generation error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LutError {
    #[error("Fixed-point error: {0}")]
    FixedPoint(#[from] lutsmith_fixed_point::FixedPointError),

    #[error("Function returned non-finite value {value} at address {address}")]
    NonFiniteValue { address: u64, value: f64 },

    #[error("Input address space of {width} bits is too large (must be at most 24 bits)")]
    AddressSpaceTooLarge { width: u32 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LutError>;
