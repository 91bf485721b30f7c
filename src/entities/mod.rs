//! CAD entity model
//!
//! Entities are kept in their decoded form: a type, the DXF attribute
//! namespace and, for LWPOLYLINE, the embedded vertex list. Raw tags are not
//! retained.

use std::fmt;
use std::str::FromStr;

use crate::error::{DxfError, Result};

pub mod lwpolyline;
pub mod namespace;

pub use lwpolyline::LwVertex;
pub use namespace::{AttrKind, AttrValue, DxfAttr, DxfNamespace, VERTEX_NAMES};

/// DXF entity types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Line,
    Point,
    Circle,
    Arc,
    Ellipse,
    Solid,
    Trace,
    Face3D,
    LwPolyline,
    Polyline,
    Spline,
    Hatch,
    MPolygon,
    Insert,
    Text,
    MText,
    Attrib,
    AttDef,
    Dimension,
    Leader,
    MLeader,
    // non-graphical
    Layer,
    Dictionary,
    XRecord,
}

impl EntityKind {
    /// Every kind, in declaration order
    pub const ALL: [EntityKind; 24] = [
        EntityKind::Line,
        EntityKind::Point,
        EntityKind::Circle,
        EntityKind::Arc,
        EntityKind::Ellipse,
        EntityKind::Solid,
        EntityKind::Trace,
        EntityKind::Face3D,
        EntityKind::LwPolyline,
        EntityKind::Polyline,
        EntityKind::Spline,
        EntityKind::Hatch,
        EntityKind::MPolygon,
        EntityKind::Insert,
        EntityKind::Text,
        EntityKind::MText,
        EntityKind::Attrib,
        EntityKind::AttDef,
        EntityKind::Dimension,
        EntityKind::Leader,
        EntityKind::MLeader,
        EntityKind::Layer,
        EntityKind::Dictionary,
        EntityKind::XRecord,
    ];

    /// DXF type name as written after group code 0
    pub fn name(self) -> &'static str {
        match self {
            EntityKind::Line => "LINE",
            EntityKind::Point => "POINT",
            EntityKind::Circle => "CIRCLE",
            EntityKind::Arc => "ARC",
            EntityKind::Ellipse => "ELLIPSE",
            EntityKind::Solid => "SOLID",
            EntityKind::Trace => "TRACE",
            EntityKind::Face3D => "3DFACE",
            EntityKind::LwPolyline => "LWPOLYLINE",
            EntityKind::Polyline => "POLYLINE",
            EntityKind::Spline => "SPLINE",
            EntityKind::Hatch => "HATCH",
            EntityKind::MPolygon => "MPOLYGON",
            EntityKind::Insert => "INSERT",
            EntityKind::Text => "TEXT",
            EntityKind::MText => "MTEXT",
            EntityKind::Attrib => "ATTRIB",
            EntityKind::AttDef => "ATTDEF",
            EntityKind::Dimension => "DIMENSION",
            EntityKind::Leader => "LEADER",
            EntityKind::MLeader => "MULTILEADER",
            EntityKind::Layer => "LAYER",
            EntityKind::Dictionary => "DICTIONARY",
            EntityKind::XRecord => "XRECORD",
        }
    }

    /// Look up a DXF type name; `MLEADER` is accepted for `MULTILEADER`
    pub fn from_name(name: &str) -> Result<Self> {
        if name == "MLEADER" {
            return Ok(EntityKind::MLeader);
        }
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| DxfError::InvalidEntityType(name.to_string()))
    }

    /// True for entities placed in a layout
    pub fn is_graphical(self) -> bool {
        !matches!(
            self,
            EntityKind::Layer | EntityKind::Dictionary | EntityKind::XRecord
        )
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EntityKind {
    type Err = DxfError;

    fn from_str(s: &str) -> Result<Self> {
        EntityKind::from_name(s)
    }
}

/// A decoded DXF entity
#[derive(Debug, Clone, PartialEq)]
pub struct DxfEntity {
    kind: EntityKind,
    /// DXF attributes
    pub dxf: DxfNamespace,
    /// Embedded vertices, LWPOLYLINE only
    pub lwpoints: Vec<LwVertex>,
    alive: bool,
}

impl DxfEntity {
    /// Create a live entity without attributes
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            dxf: DxfNamespace::new(),
            lwpoints: Vec::new(),
            alive: true,
        }
    }

    /// Create from a DXF type name
    pub fn from_name(name: &str) -> Result<Self> {
        EntityKind::from_name(name).map(Self::new)
    }

    /// Builder: set a DXF attribute
    pub fn with_attr(mut self, attr: DxfAttr, value: impl Into<AttrValue>) -> Result<Self> {
        self.dxf.set(attr, value)?;
        Ok(self)
    }

    /// Builder: set the LWPOLYLINE vertices
    pub fn with_lwpoints(mut self, points: impl IntoIterator<Item = LwVertex>) -> Self {
        self.lwpoints = points.into_iter().collect();
        self
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// DXF type name
    pub fn dxftype(&self) -> &'static str {
        self.kind.name()
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn is_graphical(&self) -> bool {
        self.kind.is_graphical()
    }

    /// True if the extrusion attribute is set explicitly
    pub fn has_extrusion(&self) -> bool {
        self.dxf.hasattr(DxfAttr::Extrusion)
    }

    /// Mark the entity as deleted
    pub fn destroy(&mut self) {
        self.alive = false;
    }
}
