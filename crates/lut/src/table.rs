//! Address-space table generation

use lutsmith_fixed_point::FixedValue;

use crate::config::LutConfig;
use crate::error::{LutError, Result};

/// One row of a generated table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableEntry {
    /// Table address, in `0..num_entries`
    pub address: u64,
    /// Unsigned code word stored at this address; always equals
    /// `output.raw()`
    pub quantized: u64,
    /// The address decoded in the input format
    pub input: FixedValue,
    /// The truncated function result in the output format
    pub output: FixedValue,
}

/// Generate the complete address → output mapping for `config`.
///
/// Every address in `[0, num_entries)` is visited in ascending order and
/// the result holds exactly one entry per address: consumers index the
/// table by position. Generation aborts on the first non-finite function
/// value; a partial table is never returned.
pub fn generate<F>(config: &LutConfig, f: F) -> Result<Vec<TableEntry>>
where
    F: Fn(f64) -> f64,
{
    config.validate()?;

    let num_entries = config.num_entries();
    let mut entries = Vec::with_capacity(num_entries as usize);

    tracing::debug!(
        entries = num_entries,
        input = %config.input,
        output = %config.output,
        "generating table"
    );

    for address in 0..num_entries {
        let input = FixedValue::from_index(config.input, address)?;
        let y = f(input.to_real());
        if !y.is_finite() {
            return Err(LutError::NonFiniteValue { address, value: y });
        }
        let output = FixedValue::from_real(config.output, y)?;
        entries.push(TableEntry {
            address,
            quantized: output.raw(),
            input,
            output,
        });
    }

    Ok(entries)
}
