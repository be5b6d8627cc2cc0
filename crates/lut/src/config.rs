//! Table generator configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use lutsmith_fixed_point::FixedFormat;

use crate::error::{LutError, Result};

/// Widest input address space the generator will enumerate. Tables are
/// materialized eagerly, one entry per code word.
pub const MAX_ADDRESS_WIDTH: u32 = 24;

/// Input and output formats for one lookup table.
///
/// The input format interprets table addresses; the output format encodes
/// function results. The two may differ in width.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LutConfig {
    /// Format used to interpret table addresses
    pub input: FixedFormat,
    /// Format used to encode function results
    pub output: FixedFormat,
}

impl LutConfig {
    pub const fn new(input: FixedFormat, output: FixedFormat) -> Self {
        Self { input, output }
    }

    /// Load a config from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Number of table entries: one per input code word. Callers validate
    /// the config first.
    pub const fn num_entries(&self) -> u64 {
        1u64 << self.input.total_width()
    }

    /// Validate both formats and the size of the address space
    pub fn validate(&self) -> Result<()> {
        self.input.validate()?;
        self.output.validate()?;
        if self.input.total_width() > MAX_ADDRESS_WIDTH {
            return Err(LutError::AddressSpaceTooLarge {
                width: self.input.total_width(),
            });
        }
        Ok(())
    }
}
