//! Matrix type for OCS basis changes

use crate::types::Vector3;
use std::ops::Mul;

/// Threshold of the arbitrary axis algorithm
pub const ARBITRARY_AXIS_THRESHOLD: f64 = 1.0 / 64.0;

/// 3x3 matrix, used as an orthonormal basis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3 {
    /// Matrix elements stored in row-major order
    pub m: [[f64; 3]; 3],
}

impl Matrix3 {
    /// Create identity matrix
    pub fn identity() -> Self {
        Self {
            m: [
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, 0.0, 1.0],
            ],
        }
    }

    /// Create a matrix whose columns are the given axes
    pub fn from_columns(ux: Vector3, uy: Vector3, uz: Vector3) -> Self {
        Self {
            m: [
                [ux.x, uy.x, uz.x],
                [ux.y, uy.y, uz.y],
                [ux.z, uy.z, uz.z],
            ],
        }
    }

    /// Create the OCS basis for an extrusion vector
    ///
    /// Implements the AutoCAD arbitrary axis algorithm: the OCS x-axis is
    /// `Wy × N` for extrusions near the world z-axis, `Wz × N` otherwise.
    pub fn arbitrary_axis(normal: Vector3) -> Self {
        let normal = normal.normalize();

        let ax = if normal.x.abs() < ARBITRARY_AXIS_THRESHOLD
            && normal.y.abs() < ARBITRARY_AXIS_THRESHOLD
        {
            Vector3::UNIT_Y
        } else {
            Vector3::UNIT_Z
        };

        let x_dir = ax.cross(&normal).normalize();
        let y_dir = normal.cross(&x_dir).normalize();

        Self::from_columns(x_dir, y_dir, normal)
    }

    /// Transpose the matrix; the inverse of an orthonormal basis
    pub fn transpose(&self) -> Self {
        Self {
            m: [
                [self.m[0][0], self.m[1][0], self.m[2][0]],
                [self.m[0][1], self.m[1][1], self.m[2][1]],
                [self.m[0][2], self.m[1][2], self.m[2][2]],
            ],
        }
    }

    /// Calculate determinant
    pub fn determinant(&self) -> f64 {
        self.m[0][0] * (self.m[1][1] * self.m[2][2] - self.m[1][2] * self.m[2][1])
            - self.m[0][1] * (self.m[1][0] * self.m[2][2] - self.m[1][2] * self.m[2][0])
            + self.m[0][2] * (self.m[1][0] * self.m[2][1] - self.m[1][1] * self.m[2][0])
    }

    /// Transform a Vector3
    pub fn transform_point(&self, v: Vector3) -> Vector3 {
        Vector3::new(
            self.m[0][0] * v.x + self.m[0][1] * v.y + self.m[0][2] * v.z,
            self.m[1][0] * v.x + self.m[1][1] * v.y + self.m[1][2] * v.z,
            self.m[2][0] * v.x + self.m[2][1] * v.y + self.m[2][2] * v.z,
        )
    }
}

impl Mul<Vector3> for Matrix3 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Self::Output {
        self.transform_point(v)
    }
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::identity()
    }
}
