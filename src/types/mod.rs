//! Geometric value types

pub mod ocs;
pub mod transform;
pub mod vector;

pub use ocs::{Ocs, FLIPPED_OCS, FLIPPED_Z_AXIS};
pub use transform::Matrix3;
pub use vector::{Vector2, Vector3};
