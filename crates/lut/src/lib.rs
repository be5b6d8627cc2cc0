//! Lutsmith Table Generation
//!
//! Drives the fixed-point codec across a full input address space,
//! evaluating a target function per address and quantizing the result.
//! Also encodes named reference constants through the same codec path
//! for diagnostic output.

mod config;
mod constants;
mod error;
mod table;

pub use config::{LutConfig, MAX_ADDRESS_WIDTH};
pub use constants::{encode_constants, ConstantReport, NamedConstant, REFERENCE_CONSTANTS};
pub use error::{LutError, Result};
pub use table::{generate, TableEntry};
