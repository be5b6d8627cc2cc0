//! Reference constant encoding
//!
//! Diagnostic encodings of the atan range boundaries, run through the same
//! codec path as table outputs. Reports are printed, never persisted.

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;

use lutsmith_fixed_point::{FixedFormat, FixedValue};

use crate::error::Result;

/// A named real constant
#[derive(Debug, Clone, Copy)]
pub struct NamedConstant {
    pub name: &'static str,
    pub value: f64,
}

/// Boundary constants of the atan family
pub const REFERENCE_CONSTANTS: [NamedConstant; 4] = [
    NamedConstant { name: "pi", value: PI },
    NamedConstant { name: "-pi", value: -PI },
    NamedConstant { name: "pi/2", value: FRAC_PI_2 },
    NamedConstant { name: "-pi/2", value: -FRAC_PI_2 },
];

/// One encoded constant, ready for display
#[derive(Debug, Clone, Copy)]
pub struct ConstantReport {
    pub name: &'static str,
    pub exact: f64,
    pub encoded: FixedValue,
}

impl fmt::Display for ConstantReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} -> {} ({})",
            self.name,
            self.exact,
            self.encoded.fixed_point_string(),
            self.encoded.to_real()
        )
    }
}

/// Encode each constant at `format`. Truncation policy is identical to the
/// table output path; there is no special-casing for exact constants.
pub fn encode_constants(
    format: FixedFormat,
    constants: &[NamedConstant],
) -> Result<Vec<ConstantReport>> {
    constants
        .iter()
        .map(|c| {
            let encoded = FixedValue::from_real(format, c.value)?;
            Ok(ConstantReport {
                name: c.name,
                exact: c.value,
                encoded,
            })
        })
        .collect()
}
