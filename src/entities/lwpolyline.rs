//! Lightweight polyline vertices (2D, with widths and bulges)

use crate::types::Vector2;

/// A vertex in a lightweight polyline
///
/// Locations are OCS coordinates; the z-coordinate of all vertices is the
/// polyline's `elevation` attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LwVertex {
    /// Location of the vertex (2D)
    pub location: Vector2,
    /// Starting width at this vertex
    pub start_width: f64,
    /// Ending width at this vertex
    pub end_width: f64,
    /// Bulge value (for arc segments)
    /// 0 = straight line, positive = counterclockwise arc, negative = clockwise arc
    /// bulge = tan(angle/4) where angle is the included angle
    pub bulge: f64,
}

impl LwVertex {
    /// Create a new vertex
    pub fn new(location: Vector2) -> Self {
        LwVertex {
            location,
            start_width: 0.0,
            end_width: 0.0,
            bulge: 0.0,
        }
    }

    /// Create a vertex from coordinates
    pub fn from_coords(x: f64, y: f64) -> Self {
        LwVertex::new(Vector2::new(x, y))
    }

    /// Create from the `(x, y, start_width, end_width, bulge)` format
    pub fn from_xyseb(x: f64, y: f64, start_width: f64, end_width: f64, bulge: f64) -> Self {
        LwVertex {
            location: Vector2::new(x, y),
            start_width,
            end_width,
            bulge,
        }
    }

    /// Builder: set the bulge
    pub fn with_bulge(mut self, bulge: f64) -> Self {
        self.bulge = bulge;
        self
    }
}
