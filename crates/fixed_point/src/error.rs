//! Fixed-point error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixedPointError {
    #[error("Index {index} out of range for {width}-bit format")]
    IndexOutOfRange { index: u64, width: u32 },

    #[error("Invalid format width: {0} (must be at most 63 bits)")]
    WidthTooLarge(u32),
}

pub type Result<T> = std::result::Result<T, FixedPointError>;
