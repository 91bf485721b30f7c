//! Entity builders for upright tests.

#![allow(dead_code)]

use dxf_upright::entities::{DxfAttr, DxfEntity, EntityKind, LwVertex, VERTEX_NAMES};
use dxf_upright::Vector3;

use super::FLIPPED;

/// An entity of `kind` with the extrusion attribute set to `extrusion`
pub fn with_extrusion(kind: EntityKind, extrusion: Vector3) -> DxfEntity {
    DxfEntity::new(kind)
        .with_attr(DxfAttr::Extrusion, extrusion)
        .unwrap()
}

pub fn circle(center: Vector3, radius: f64, extrusion: Vector3) -> DxfEntity {
    with_extrusion(EntityKind::Circle, extrusion)
        .with_attr(DxfAttr::Center, center)
        .unwrap()
        .with_attr(DxfAttr::Radius, radius)
        .unwrap()
}

pub fn arc(center: Vector3, start_angle: f64, end_angle: f64, extrusion: Vector3) -> DxfEntity {
    with_extrusion(EntityKind::Arc, extrusion)
        .with_attr(DxfAttr::Center, center)
        .unwrap()
        .with_attr(DxfAttr::Radius, 1.0)
        .unwrap()
        .with_attr(DxfAttr::StartAngle, start_angle)
        .unwrap()
        .with_attr(DxfAttr::EndAngle, end_angle)
        .unwrap()
}

pub fn ellipse(start_param: f64, end_param: f64, extrusion: Vector3) -> DxfEntity {
    with_extrusion(EntityKind::Ellipse, extrusion)
        .with_attr(DxfAttr::Center, Vector3::new(2.0, 3.0, 0.0))
        .unwrap()
        .with_attr(DxfAttr::MajorAxis, Vector3::new(4.0, 0.0, 0.0))
        .unwrap()
        .with_attr(DxfAttr::Ratio, 0.5)
        .unwrap()
        .with_attr(DxfAttr::StartParam, start_param)
        .unwrap()
        .with_attr(DxfAttr::EndParam, end_param)
        .unwrap()
}

/// SOLID or TRACE with up to four corners
pub fn solid(kind: EntityKind, corners: &[Vector3], extrusion: Vector3) -> DxfEntity {
    corners
        .iter()
        .zip(VERTEX_NAMES)
        .fold(with_extrusion(kind, extrusion), |entity, (corner, attr)| {
            entity.with_attr(attr, *corner).unwrap()
        })
}

pub fn text(extrusion: Vector3) -> DxfEntity {
    with_extrusion(EntityKind::Text, extrusion)
        .with_attr(DxfAttr::Insert, Vector3::new(1.0, 2.0, 0.0))
        .unwrap()
        .with_attr(DxfAttr::Text, "mirrored")
        .unwrap()
        .with_attr(DxfAttr::Height, 2.5)
        .unwrap()
        .with_attr(DxfAttr::Rotation, 30.0)
        .unwrap()
}

/// LWPOLYLINE from `(x, y, bulge)` vertices
pub fn lwpolyline(points: &[(f64, f64, f64)], extrusion: Vector3) -> DxfEntity {
    with_extrusion(EntityKind::LwPolyline, extrusion).with_lwpoints(
        points
            .iter()
            .map(|&(x, y, bulge)| LwVertex::from_coords(x, y).with_bulge(bulge)),
    )
}

/// One flipped entity of every kind upright rewrites, plus a text and a hatch
pub fn flipped_drawing() -> Vec<DxfEntity> {
    vec![
        circle(Vector3::new(1.0, 1.0, 0.0), 2.0, FLIPPED),
        arc(Vector3::new(5.0, 0.0, 0.0), 30.0, 120.0, FLIPPED),
        ellipse(0.5, 2.0, FLIPPED),
        solid(
            EntityKind::Solid,
            &[
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(0.0, 1.0, 0.0),
                Vector3::new(1.0, 1.0, 0.0),
            ],
            FLIPPED,
        ),
        solid(
            EntityKind::Trace,
            &[Vector3::new(2.0, 0.0, 0.0), Vector3::new(3.0, 0.0, 0.0)],
            FLIPPED,
        ),
        lwpolyline(&[(0.0, 0.0, 0.0), (4.0, 0.0, 1.0), (4.0, 4.0, 0.0)], FLIPPED),
        text(FLIPPED),
        with_extrusion(EntityKind::Hatch, FLIPPED),
    ]
}
