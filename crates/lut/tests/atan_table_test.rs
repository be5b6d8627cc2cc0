//! Atan table integration tests
//!
//! End-to-end checks of the generator against hand-computed code words,
//! plus path-independence between the table and constant encoder.

use std::f64::consts::FRAC_PI_2;

use lutsmith_fixed_point::{FixedFormat, FixedValue};
use lutsmith_lut::{encode_constants, generate, LutConfig, REFERENCE_CONSTANTS};

fn atan_config() -> LutConfig {
    LutConfig::new(FixedFormat::new(5, 6), FixedFormat::new(2, 5))
}

#[test]
fn test_full_table_covers_address_space() {
    let entries = generate(&atan_config(), f64::atan).unwrap();

    assert_eq!(entries.len(), 4096);
    assert_eq!(entries.first().unwrap().address, 0);
    assert_eq!(entries.last().unwrap().address, 4095);

    // Every code word is a valid 8-bit output word
    assert!(entries.iter().all(|e| e.quantized < 256));
}

#[test]
fn test_positive_and_negative_halves() {
    let entries = generate(&atan_config(), f64::atan).unwrap();

    // Addresses below the sign boundary decode to non-negative inputs
    assert!(entries[..2048].iter().all(|e| e.input.to_real() >= 0.0));
    assert!(entries[2048..].iter().all(|e| e.input.to_real() < 0.0));

    // atan is odd and never exactly zero off the origin, so the floor of
    // every negative-half output stays below zero
    assert!(entries[2048..].iter().all(|e| e.output.sign_bit() == 1));
    assert!(entries[..2048].iter().all(|e| e.output.sign_bit() == 0));
}

#[test]
fn test_constant_encoder_matches_table_path() {
    let format = FixedFormat::new(2, 5);

    let reports = encode_constants(format, &REFERENCE_CONSTANTS).unwrap();
    let half_pi = reports.iter().find(|r| r.name == "pi/2").unwrap();
    assert_eq!(half_pi.encoded.raw(), 50);

    // A table whose function is constant at pi/2 stores the same word at
    // every address
    let config = LutConfig::new(FixedFormat::new(1, 1), format);
    let table = generate(&config, |_| FRAC_PI_2).unwrap();
    assert!(table.iter().all(|e| e.quantized == 50));

    // Direct codec call agrees with both
    let direct = FixedValue::from_real(format, FRAC_PI_2).unwrap();
    assert_eq!(direct.raw(), half_pi.encoded.raw());
}
