//! Object coordinate system (OCS)
//!
//! Planar entities store their geometry in a local coordinate frame derived
//! from their extrusion vector by the arbitrary axis algorithm.

use once_cell::sync::Lazy;

use crate::types::{Matrix3, Vector3};

/// Extrusion vector of the mirrored OCS handled by upright
pub const FLIPPED_Z_AXIS: Vector3 = Vector3::new(0.0, 0.0, -1.0);

/// The OCS defined by [`FLIPPED_Z_AXIS`]
pub static FLIPPED_OCS: Lazy<Ocs> = Lazy::new(|| Ocs::new(FLIPPED_Z_AXIS));

/// An object coordinate system defined by an extrusion vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ocs {
    extrusion: Vector3,
    matrix: Matrix3,
}

impl Ocs {
    /// Create the OCS for `extrusion` (normalized internally)
    pub fn new(extrusion: Vector3) -> Self {
        let extrusion = extrusion.normalize();
        Self {
            extrusion,
            matrix: Matrix3::arbitrary_axis(extrusion),
        }
    }

    /// Normalized extrusion vector
    pub fn extrusion(&self) -> Vector3 {
        self.extrusion
    }

    /// True if the OCS is the world coordinate system
    pub fn is_wcs(&self) -> bool {
        self.extrusion.is_close(&Vector3::UNIT_Z, 1e-12)
    }

    /// Convert an OCS point to WCS
    pub fn to_wcs(&self, point: Vector3) -> Vector3 {
        self.matrix.transform_point(point)
    }

    /// Convert a WCS point to OCS
    pub fn from_wcs(&self, point: Vector3) -> Vector3 {
        self.matrix.transpose().transform_point(point)
    }
}

impl Default for Ocs {
    fn default() -> Self {
        Ocs::new(Vector3::UNIT_Z)
    }
}
