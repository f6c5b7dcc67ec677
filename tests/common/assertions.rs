//! Test assertion helpers
//!
//! Rounded figures are exact in the library, but values read back from JSON
//! or summed in tests can drift by an ulp.

#![allow(dead_code)]

/// Assert that two floating-point values are approximately equal
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff < epsilon,
        "Float values not approximately equal:\n  actual: {}\n  expected: {}\n  diff: {} (epsilon: {})",
        actual, expected, diff, epsilon
    );
}

/// Read a number from a JSON value by pointer, panicking with context if absent
pub fn json_f64(value: &serde_json::Value, pointer: &str) -> f64 {
    value
        .pointer(pointer)
        .and_then(serde_json::Value::as_f64)
        .unwrap_or_else(|| panic!("no number at {} in {}", pointer, value))
}
