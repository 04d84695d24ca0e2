//! Reference conversions every backend change must keep.

use cq_units::{ConversionFamily, UomConverter, convert_units, units_for};
use proptest::prelude::*;

/// Within a half hundredth, i.e. equal once rounded to 2 decimals.
fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() <= 0.005 + 1e-9,
        "{what}: expected {expected}, got {actual}"
    );
}

#[test]
fn temperature_reference_values() {
    let conv = UomConverter::new();
    let cases = [
        (32.0, "degF", "degC", 0.0),
        (0.0, "degC", "degF", 32.0),
        (0.0, "degC", "degC", 0.0),
        (0.0, "degC", "K", 273.15),
        (0.0, "degC", "degR", 491.67),
    ];
    for (value, from, to, expected) in cases {
        let got = convert_units(&conv, value, from, to).unwrap();
        assert_close(got, expected, &format!("{value} {from} -> {to}"));
    }
}

#[test]
fn volume_reference_values() {
    let conv = UomConverter::new();
    let cases = [
        (10.0, "cuft", "cuin", 17280.0),
        (10.0, "cuin", "cup", 0.69),
        (10.0, "cup", "gallon", 0.62),
        (10.0, "gallon", "litre", 37.85),
        (10.0, "tablespoon", "tablespoon", 10.0),
    ];
    for (value, from, to, expected) in cases {
        let got = convert_units(&conv, value, from, to).unwrap();
        assert_close(got, expected, &format!("{value} {from} -> {to}"));
    }
}

#[test]
fn negative_temperatures_convert() {
    let got = convert_units(&UomConverter, -40.0, "degC", "degF").unwrap();
    assert!((got + 40.0).abs() < 1e-9);
}

#[test]
fn round_trip_through_every_pair() {
    let conv = UomConverter::new();
    for family in ConversionFamily::ALL {
        for a in units_for(family) {
            for b in units_for(family) {
                let there = convert_units(&conv, 12.5, a.code, b.code).unwrap();
                let back = convert_units(&conv, there, b.code, a.code).unwrap();
                assert!(
                    (back - 12.5).abs() < 1e-9,
                    "{} -> {} -> {} gave {back}",
                    a.code,
                    b.code,
                    a.code
                );
            }
        }
    }
}

fn any_unit() -> impl Strategy<Value = &'static str> {
    let codes: Vec<&'static str> = ConversionFamily::ALL
        .into_iter()
        .flat_map(|f| units_for(f).iter().map(|u| u.code))
        .collect();
    prop::sample::select(codes)
}

proptest! {
    #[test]
    fn identity_is_exact(v in -1.0e9_f64..1.0e9_f64, code in any_unit()) {
        let got = convert_units(&UomConverter, v, code, code).unwrap();
        prop_assert_eq!(got.to_bits(), v.to_bits());
    }
}
