//! Fixed-point value codec
//!
//! Conversion between real numbers, unsigned table addresses, and
//! two's-complement code words of a fixed width.

use crate::error::{FixedPointError, Result};
use crate::format::FixedFormat;

/// A fixed-point value: a format plus a two's-complement code word of
/// exactly `format.total_width()` bits.
///
/// Bits above the format width are always zero. Values are constructed
/// once and read out; they are never resized or mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedValue {
    format: FixedFormat,
    bits: u64,
}

impl FixedValue {
    /// Decode an unsigned table address into a fixed-point value.
    ///
    /// `index` must be a valid `total_width`-bit code word; anything wider
    /// is a caller error.
    pub fn from_index(format: FixedFormat, index: u64) -> Result<Self> {
        format.validate()?;
        if index >= format.num_codes() {
            return Err(FixedPointError::IndexOutOfRange {
                index,
                width: format.total_width(),
            });
        }
        Ok(Self {
            format,
            bits: index,
        })
    }

    /// Encode a real value at the format's precision.
    ///
    /// The exact binary expansion is sign-extended to `integer_bits`,
    /// zero-padded to `frac_bits`, then truncated to `frac_bits`:
    /// low-order fractional bits are discarded, never rounded. Values
    /// whose integer part does not fit `integer_bits` wrap silently
    /// through the bit reassembly.
    pub fn from_real(format: FixedFormat, value: f64) -> Result<Self> {
        format.validate()?;
        // Scaling by a power of two only shifts the f64 exponent, so the
        // floor runs on the exact expansion of `value`.
        let scaled = (value * (1u64 << format.frac_bits) as f64).floor();
        let bits = (scaled as i128 as u64) & format.mask();
        Ok(Self { format, bits })
    }

    /// The format this value is encoded in
    pub fn format(&self) -> FixedFormat {
        self.format
    }

    /// The raw unsigned code word (what a table stores)
    pub fn raw(&self) -> u64 {
        self.bits
    }

    /// Interpret the code word as two's complement and return the real
    /// value it represents
    pub fn to_real(&self) -> f64 {
        let width = self.format.total_width();
        let signed = if (self.bits >> (width - 1)) & 1 == 1 {
            self.bits as i128 - (1i128 << width)
        } else {
            self.bits as i128
        };
        signed as f64 / (1u64 << self.format.frac_bits) as f64
    }

    /// Sign bit: 1 for negative values
    pub fn sign_bit(&self) -> u64 {
        (self.bits >> (self.format.total_width() - 1)) & 1
    }

    /// The integer field, sign-extension bits included
    pub fn integer_field(&self) -> u64 {
        (self.bits >> self.format.frac_bits) & ((1u64 << self.format.integer_bits) - 1)
    }

    /// The fractional field
    pub fn frac_field(&self) -> u64 {
        self.bits & ((1u64 << self.format.frac_bits) - 1)
    }

    /// The code word as a zero-padded binary string
    pub fn bit_string(&self) -> String {
        format!(
            "{:0width$b}",
            self.bits,
            width = self.format.total_width() as usize
        )
    }

    /// The code word with a separator before the fractional field, e.g.
    /// `110.01110` for -1.5625 in Q2.5
    pub fn fixed_point_string(&self) -> String {
        let bits = self.bit_string();
        if self.format.frac_bits == 0 {
            return bits;
        }
        let split = bits.len() - self.format.frac_bits as usize;
        format!("{}.{}", &bits[..split], &bits[split..])
    }
}

impl std::fmt::Display for FixedValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.fixed_point_string())
    }
}
