//! Upright: flip entities out of an inverted OCS
//!
//! An entity with the extrusion vector (0, 0, -1) lives in an OCS that is
//! the mirror image of the WCS aligned OCS. [`upright`] rewrites its DXF
//! attributes for the extrusion vector (0, 0, 1) so that the entity keeps
//! its place and shape in the WCS.
//!
//! Entities with any other extrusion vector, dead or non-graphical
//! entities and unsupported entity types are silently ignored. A mirrored
//! text cannot be expressed with the default extrusion, so TEXT, ATTRIB,
//! ATTDEF, MTEXT, DIMENSION, LEADER and MULTILEADER are never flipped.
//!
//! The flipped entity is equivalent but not always identical: arc angles
//! run counter-clockwise around the extrusion vector, so a flipped arc
//! starts at the former end point.

use std::f64::consts::PI;

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::entities::{DxfAttr, DxfEntity, DxfNamespace, EntityKind, VERTEX_NAMES};
use crate::error::{DxfError, Result};
use crate::types::{Vector3, FLIPPED_OCS, FLIPPED_Z_AXIS};

/// Options of the upright pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UprightConfiguration {
    /// Absolute per-component tolerance when comparing the normalized
    /// extrusion vector against (0, 0, -1).
    ///
    /// Default: `1e-12`.
    pub tolerance: f64,

    /// When `true`, flip the embedded vertices of complex entities that
    /// have an implementation (LWPOLYLINE). When `false` all complex
    /// entities are left untouched.
    ///
    /// Default: `true`.
    pub complex_entities: bool,
}

impl Default for UprightConfiguration {
    fn default() -> Self {
        Self {
            tolerance: 1e-12,
            complex_entities: true,
        }
    }
}

/// Rewrites the DXF attributes only
pub type SimpleTool = fn(&mut DxfNamespace) -> Result<()>;

/// Rewrites attributes and embedded geometry
pub type ComplexTool = fn(&mut DxfEntity) -> Result<()>;

/// How an entity type is flipped
#[derive(Debug, Clone, Copy)]
pub enum UprightMode {
    Simple(SimpleTool),
    /// `None`: flipping is required but not implemented yet
    Complex(Option<ComplexTool>),
    Unsupported,
}

/// Upright mode of each entity type
pub fn upright_mode(kind: EntityKind) -> UprightMode {
    match kind {
        EntityKind::Circle => UprightMode::Simple(flip_circle),
        EntityKind::Arc => UprightMode::Simple(flip_arc),
        EntityKind::Solid | EntityKind::Trace => UprightMode::Simple(flip_solid),
        EntityKind::Ellipse => UprightMode::Simple(flip_ellipse),
        EntityKind::LwPolyline => UprightMode::Complex(Some(flip_lwpolyline)),
        // TODO: flip 2D POLYLINE vertices, HATCH and MPOLYGON boundary paths
        // and the INSERT location/rotation/scaling
        EntityKind::Polyline | EntityKind::Hatch | EntityKind::MPolygon | EntityKind::Insert => {
            UprightMode::Complex(None)
        }
        // WCS entities
        EntityKind::Line | EntityKind::Point | EntityKind::Face3D | EntityKind::Spline => {
            UprightMode::Unsupported
        }
        EntityKind::Text
        | EntityKind::MText
        | EntityKind::Attrib
        | EntityKind::AttDef
        | EntityKind::Dimension
        | EntityKind::Leader
        | EntityKind::MLeader => UprightMode::Unsupported,
        EntityKind::Layer | EntityKind::Dictionary | EntityKind::XRecord => {
            UprightMode::Unsupported
        }
    }
}

/// The upright pass with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct Upright {
    config: UprightConfiguration,
}

impl Upright {
    pub fn new(config: UprightConfiguration) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &UprightConfiguration {
        &self.config
    }

    /// Flip `entity` if its extrusion vector is (0, 0, -1).
    ///
    /// Never fails; entities that cannot or need not be flipped are left
    /// unchanged.
    pub fn apply(&self, entity: &mut DxfEntity) {
        let dxftype = entity.dxftype();
        if !entity.is_alive() {
            debug!(dxftype, "upright skipped: entity is not alive");
            return;
        }
        if !entity.is_graphical() {
            debug!(dxftype, "upright skipped: not a graphical entity");
            return;
        }
        if !entity.has_extrusion() {
            debug!(dxftype, "upright skipped: no extrusion vector");
            return;
        }
        let extrusion = entity
            .dxf
            .get_vector(DxfAttr::Extrusion)
            .unwrap_or(Vector3::UNIT_Z)
            .normalize();
        if !extrusion.is_close(&FLIPPED_Z_AXIS, self.config.tolerance) {
            debug!(dxftype, %extrusion, "upright skipped: OCS is not inverted");
            return;
        }

        let result = match upright_mode(entity.kind()) {
            UprightMode::Simple(tool) => tool(&mut entity.dxf),
            UprightMode::Complex(Some(tool)) if self.config.complex_entities => tool(entity),
            UprightMode::Complex(_) => {
                debug!(dxftype, "upright not implemented for entity type");
                return;
            }
            UprightMode::Unsupported => {
                debug!(dxftype, "upright skipped: unsupported entity type");
                return;
            }
        };
        match result {
            Ok(()) => debug!(dxftype, "flipped inverted OCS"),
            Err(err) => warn!(dxftype, %err, "upright failed"),
        }
    }

    /// Apply to all `entities` in order
    pub fn apply_all<'a>(&self, entities: impl IntoIterator<Item = &'a mut DxfEntity>) {
        for entity in entities {
            self.apply(entity);
        }
    }

    /// Apply to all `entities` in parallel
    pub fn apply_all_par(&self, entities: &mut [DxfEntity]) {
        entities.par_iter_mut().for_each(|entity| self.apply(entity));
    }
}

/// Flip `entity` with the default configuration, see [`Upright::apply`]
pub fn upright(entity: &mut DxfEntity) {
    Upright::default().apply(entity);
}

/// Call [`upright`] for all `entities`
pub fn upright_all<'a>(entities: impl IntoIterator<Item = &'a mut DxfEntity>) {
    Upright::default().apply_all(entities);
}

/// Parallel [`upright_all`]
pub fn upright_all_par(entities: &mut [DxfEntity]) {
    Upright::default().apply_all_par(entities);
}

/// Reflect an angle in degrees, keeping its sign convention
pub fn flip_deg_angle(angle: f64) -> f64 {
    (if angle >= 0.0 { 180.0 } else { -180.0 }) - angle
}

/// Reflect an angle in radians, keeping its sign convention
pub fn flip_rad_angle(angle: f64) -> f64 {
    (if angle >= 0.0 { PI } else { -PI }) - angle
}

fn flip_vertex(vertex: Vector3) -> Vector3 {
    FLIPPED_OCS.to_wcs(vertex)
}

fn require_vector(dxf: &DxfNamespace, attr: DxfAttr) -> Result<Vector3> {
    dxf.get_vector(attr).ok_or(DxfError::InvalidAttributeValue {
        attribute: attr.name(),
        expected: "vector",
    })
}

fn require_f64(dxf: &DxfNamespace, attr: DxfAttr) -> Result<f64> {
    dxf.get_f64(attr).ok_or(DxfError::InvalidAttributeValue {
        attribute: attr.name(),
        expected: "float",
    })
}

fn flip_existing_vertex(dxf: &mut DxfNamespace, attr: DxfAttr) -> Result<()> {
    if dxf.hasattr(attr) {
        let vertex = require_vector(dxf, attr)?;
        dxf.set(attr, flip_vertex(vertex))?;
    }
    Ok(())
}

fn negate_existing(dxf: &mut DxfNamespace, attr: DxfAttr) -> Result<()> {
    if dxf.hasattr(attr) {
        let value = require_f64(dxf, attr)?;
        dxf.set(attr, -value)?;
    }
    Ok(())
}

fn flip_circle(dxf: &mut DxfNamespace) -> Result<()> {
    let center = require_vector(dxf, DxfAttr::Center)?;
    dxf.set(DxfAttr::Center, flip_vertex(center))?;
    negate_existing(dxf, DxfAttr::Thickness)?;
    dxf.discard(DxfAttr::Extrusion);
    Ok(())
}

fn flip_arc(dxf: &mut DxfNamespace) -> Result<()> {
    let start_angle = require_f64(dxf, DxfAttr::StartAngle)?;
    let end_angle = require_f64(dxf, DxfAttr::EndAngle)?;
    flip_circle(dxf)?;
    // reversed handedness reverses the sweep direction
    dxf.set(DxfAttr::EndAngle, flip_deg_angle(start_angle))?;
    dxf.set(DxfAttr::StartAngle, flip_deg_angle(end_angle))?;
    Ok(())
}

fn flip_solid(dxf: &mut DxfNamespace) -> Result<()> {
    for attr in VERTEX_NAMES {
        flip_existing_vertex(dxf, attr)?;
    }
    negate_existing(dxf, DxfAttr::Thickness)?;
    dxf.discard(DxfAttr::Extrusion);
    Ok(())
}

// ELLIPSE is a WCS entity, only the parameters change
fn flip_ellipse(dxf: &mut DxfNamespace) -> Result<()> {
    let start_param = require_f64(dxf, DxfAttr::StartParam)?;
    let end_param = require_f64(dxf, DxfAttr::EndParam)?;
    dxf.set(DxfAttr::EndParam, -start_param)?;
    dxf.set(DxfAttr::StartParam, -end_param)?;
    dxf.discard(DxfAttr::Extrusion);
    Ok(())
}

fn flip_lwpolyline(entity: &mut DxfEntity) -> Result<()> {
    for point in entity.lwpoints.iter_mut() {
        point.location = flip_vertex(point.location.with_z(0.0)).xy();
        point.bulge = -point.bulge;
    }
    negate_existing(&mut entity.dxf, DxfAttr::Thickness)?;
    negate_existing(&mut entity.dxf, DxfAttr::Elevation)?;
    entity.dxf.discard(DxfAttr::Extrusion);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::LwVertex;
    use crate::types::Vector2;

    fn flipped(kind: EntityKind) -> DxfEntity {
        DxfEntity::new(kind)
            .with_attr(DxfAttr::Extrusion, FLIPPED_Z_AXIS)
            .unwrap()
    }

    #[test]
    fn test_flip_deg_angle() {
        assert_eq!(flip_deg_angle(30.0), 150.0);
        assert_eq!(flip_deg_angle(0.0), 180.0);
        assert_eq!(flip_deg_angle(180.0), 0.0);
        assert_eq!(flip_deg_angle(270.0), -90.0);
        assert_eq!(flip_deg_angle(-30.0), -150.0);
    }

    #[test]
    fn test_flip_rad_angle() {
        assert!((flip_rad_angle(PI / 6.0) - 5.0 * PI / 6.0).abs() < 1e-12);
        assert!((flip_rad_angle(-PI / 2.0) + PI / 2.0).abs() < 1e-12);
        assert_eq!(flip_rad_angle(0.0), PI);
    }

    #[test]
    fn test_circle() {
        let mut circle = flipped(EntityKind::Circle)
            .with_attr(DxfAttr::Center, Vector3::new(1.0, 2.0, 3.0))
            .unwrap()
            .with_attr(DxfAttr::Thickness, 2.0)
            .unwrap()
            .with_attr(DxfAttr::Radius, 5.0)
            .unwrap();
        upright(&mut circle);
        assert!(!circle.has_extrusion());
        let center = circle.dxf.get_vector(DxfAttr::Center).unwrap();
        assert!(center.is_close(&Vector3::new(-1.0, 2.0, -3.0), 1e-12));
        assert_eq!(circle.dxf.get_f64(DxfAttr::Thickness), Some(-2.0));
        assert_eq!(circle.dxf.get_f64(DxfAttr::Radius), Some(5.0));
    }

    #[test]
    fn test_circle_without_thickness_stays_without() {
        let mut circle = flipped(EntityKind::Circle);
        upright(&mut circle);
        assert!(!circle.dxf.hasattr(DxfAttr::Thickness));
        // default center is written back
        assert!(circle.dxf.hasattr(DxfAttr::Center));
    }

    #[test]
    fn test_ellipse_uses_default_params() {
        let mut ellipse = flipped(EntityKind::Ellipse);
        upright(&mut ellipse);
        assert_eq!(ellipse.dxf.get_f64(DxfAttr::StartParam), Some(-std::f64::consts::TAU));
        assert_eq!(ellipse.dxf.get_f64(DxfAttr::EndParam), Some(-0.0));
    }

    #[test]
    fn test_solid_flips_existing_vertices_only() {
        let mut solid = flipped(EntityKind::Solid)
            .with_attr(DxfAttr::Vtx0, Vector3::new(1.0, 0.0, 0.0))
            .unwrap()
            .with_attr(DxfAttr::Vtx1, Vector3::new(2.0, 0.0, 0.0))
            .unwrap()
            .with_attr(DxfAttr::Vtx2, Vector3::new(2.0, 1.0, 0.0))
            .unwrap();
        upright(&mut solid);
        assert_eq!(solid.dxf.get_vector(DxfAttr::Vtx0).unwrap().x, -1.0);
        assert_eq!(solid.dxf.get_vector(DxfAttr::Vtx1).unwrap().x, -2.0);
        assert_eq!(solid.dxf.get_vector(DxfAttr::Vtx2).unwrap().y, 1.0);
        assert!(!solid.dxf.hasattr(DxfAttr::Vtx3));
        assert!(!solid.has_extrusion());
    }

    #[test]
    fn test_lwpolyline() {
        let mut polyline = flipped(EntityKind::LwPolyline)
            .with_attr(DxfAttr::Elevation, 4.0)
            .unwrap()
            .with_lwpoints([
                LwVertex::from_xyseb(1.0, 2.0, 0.1, 0.2, 0.5),
                LwVertex::from_coords(3.0, -1.0),
            ]);
        upright(&mut polyline);
        assert_eq!(polyline.lwpoints[0].location, Vector2::new(-1.0, 2.0));
        assert_eq!(polyline.lwpoints[0].bulge, -0.5);
        assert_eq!(polyline.lwpoints[0].start_width, 0.1);
        assert_eq!(polyline.lwpoints[0].end_width, 0.2);
        assert_eq!(polyline.lwpoints[1].location, Vector2::new(-3.0, -1.0));
        assert_eq!(polyline.dxf.get_f64(DxfAttr::Elevation), Some(-4.0));
        assert!(!polyline.has_extrusion());
    }

    #[test]
    fn test_complex_entities_disabled() {
        let upright = Upright::new(UprightConfiguration {
            complex_entities: false,
            ..Default::default()
        });
        let mut polyline =
            flipped(EntityKind::LwPolyline).with_lwpoints([LwVertex::from_coords(1.0, 2.0)]);
        let before = polyline.clone();
        upright.apply(&mut polyline);
        assert_eq!(polyline, before);
    }

    #[test]
    fn test_placeholders_are_untouched() {
        for kind in [
            EntityKind::Polyline,
            EntityKind::Hatch,
            EntityKind::MPolygon,
            EntityKind::Insert,
        ] {
            assert!(matches!(upright_mode(kind), UprightMode::Complex(None)));
            let mut entity = flipped(kind)
                .with_attr(DxfAttr::Insert, Vector3::new(1.0, 1.0, 0.0))
                .unwrap();
            let before = entity.clone();
            upright(&mut entity);
            assert_eq!(entity, before, "{kind}");
        }
    }

    #[test]
    fn test_tolerance() {
        let nearly = Vector3::new(1e-9, 0.0, -1.0);
        let mut circle = DxfEntity::new(EntityKind::Circle)
            .with_attr(DxfAttr::Extrusion, nearly)
            .unwrap();
        upright(&mut circle);
        assert!(circle.has_extrusion());

        let loose = Upright::new(UprightConfiguration {
            tolerance: 1e-6,
            ..Default::default()
        });
        loose.apply(&mut circle);
        assert!(!circle.has_extrusion());
    }

    #[test]
    fn test_non_unit_extrusion_is_normalized() {
        let mut circle = DxfEntity::new(EntityKind::Circle)
            .with_attr(DxfAttr::Extrusion, Vector3::new(0.0, 0.0, -2.5))
            .unwrap();
        upright(&mut circle);
        assert!(!circle.has_extrusion());
    }

    #[test]
    fn test_every_kind_has_a_mode() {
        for kind in EntityKind::ALL {
            let mode = upright_mode(kind);
            if !kind.is_graphical() {
                assert!(matches!(mode, UprightMode::Unsupported));
            }
        }
    }
}
