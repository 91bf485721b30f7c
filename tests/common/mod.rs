//! Shared test utilities for dxf-upright integration tests.

#![allow(dead_code)]

pub mod builders;

use dxf_upright::io::dxf::DxfTag;
use dxf_upright::Vector3;

pub const TOLERANCE: f64 = 1e-12;

/// Extrusion vector of the inverted OCS
pub const FLIPPED: Vector3 = Vector3::new(0.0, 0.0, -1.0);

/// Assert two vectors are equal within [`TOLERANCE`]
pub fn assert_vector_close(actual: Vector3, expected: Vector3) {
    assert!(
        actual.is_close(&expected, TOLERANCE),
        "expected {expected}, got {actual}"
    );
}

/// Split `dxfstr` output into `(code, value)` pairs
pub fn records(text: &str) -> Vec<(i32, String)> {
    let lines: Vec<&str> = text.lines().collect();
    lines
        .chunks(2)
        .map(|pair| {
            let code = pair[0].trim().parse::<i32>().expect("group code line");
            (code, pair[1].to_string())
        })
        .collect()
}

/// Serialize tags the way a writer concatenates them
pub fn dxfstr_all(tags: &[DxfTag]) -> String {
    tags.iter().map(|tag| tag.dxfstr()).collect()
}
