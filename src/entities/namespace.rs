//! DXF attribute namespace
//!
//! The decoded DXF attributes of an entity, keyed by [`DxfAttr`]. Every
//! attribute has a fixed value kind which `set` enforces, so reads can rely
//! on the stored type.

use std::f64::consts::TAU;
use std::fmt;

use indexmap::IndexMap;

use crate::error::{DxfError, Result};
use crate::types::Vector3;

/// Value kind of an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrKind {
    Text,
    Int,
    Float,
    Vector,
}

impl AttrKind {
    pub fn name(self) -> &'static str {
        match self {
            AttrKind::Text => "text",
            AttrKind::Int => "int",
            AttrKind::Float => "float",
            AttrKind::Vector => "vector",
        }
    }
}

/// Attribute keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DxfAttr {
    Layer,
    Color,
    Text,
    Center,
    Radius,
    Thickness,
    Extrusion,
    /// Degrees
    StartAngle,
    /// Degrees
    EndAngle,
    MajorAxis,
    Ratio,
    /// Radians
    StartParam,
    /// Radians
    EndParam,
    Vtx0,
    Vtx1,
    Vtx2,
    Vtx3,
    Elevation,
    ConstWidth,
    Flags,
    Insert,
    Rotation,
    Height,
}

/// Corner attributes of SOLID and TRACE
pub const VERTEX_NAMES: [DxfAttr; 4] = [DxfAttr::Vtx0, DxfAttr::Vtx1, DxfAttr::Vtx2, DxfAttr::Vtx3];

impl DxfAttr {
    /// DXF attribute name
    pub fn name(self) -> &'static str {
        match self {
            DxfAttr::Layer => "layer",
            DxfAttr::Color => "color",
            DxfAttr::Text => "text",
            DxfAttr::Center => "center",
            DxfAttr::Radius => "radius",
            DxfAttr::Thickness => "thickness",
            DxfAttr::Extrusion => "extrusion",
            DxfAttr::StartAngle => "start_angle",
            DxfAttr::EndAngle => "end_angle",
            DxfAttr::MajorAxis => "major_axis",
            DxfAttr::Ratio => "ratio",
            DxfAttr::StartParam => "start_param",
            DxfAttr::EndParam => "end_param",
            DxfAttr::Vtx0 => "vtx0",
            DxfAttr::Vtx1 => "vtx1",
            DxfAttr::Vtx2 => "vtx2",
            DxfAttr::Vtx3 => "vtx3",
            DxfAttr::Elevation => "elevation",
            DxfAttr::ConstWidth => "const_width",
            DxfAttr::Flags => "flags",
            DxfAttr::Insert => "insert",
            DxfAttr::Rotation => "rotation",
            DxfAttr::Height => "height",
        }
    }

    pub fn kind(self) -> AttrKind {
        match self {
            DxfAttr::Layer | DxfAttr::Text => AttrKind::Text,
            DxfAttr::Color | DxfAttr::Flags => AttrKind::Int,
            DxfAttr::Center
            | DxfAttr::Extrusion
            | DxfAttr::MajorAxis
            | DxfAttr::Vtx0
            | DxfAttr::Vtx1
            | DxfAttr::Vtx2
            | DxfAttr::Vtx3
            | DxfAttr::Insert => AttrKind::Vector,
            DxfAttr::Radius
            | DxfAttr::Thickness
            | DxfAttr::StartAngle
            | DxfAttr::EndAngle
            | DxfAttr::Ratio
            | DxfAttr::StartParam
            | DxfAttr::EndParam
            | DxfAttr::Elevation
            | DxfAttr::ConstWidth
            | DxfAttr::Rotation
            | DxfAttr::Height => AttrKind::Float,
        }
    }

    /// Value reported for an attribute that was never set
    pub fn default_value(self) -> Option<AttrValue> {
        let value = match self {
            DxfAttr::Layer => AttrValue::Text("0".to_string()),
            DxfAttr::Color => AttrValue::Int(256),
            DxfAttr::Center | DxfAttr::Insert => AttrValue::Vector(Vector3::ZERO),
            DxfAttr::Extrusion => AttrValue::Vector(Vector3::UNIT_Z),
            DxfAttr::Thickness
            | DxfAttr::Elevation
            | DxfAttr::ConstWidth
            | DxfAttr::Rotation
            | DxfAttr::StartAngle
            | DxfAttr::StartParam => AttrValue::Float(0.0),
            DxfAttr::EndAngle => AttrValue::Float(360.0),
            DxfAttr::EndParam => AttrValue::Float(TAU),
            DxfAttr::Radius | DxfAttr::Ratio | DxfAttr::Height => AttrValue::Float(1.0),
            DxfAttr::Flags => AttrValue::Int(0),
            DxfAttr::Text
            | DxfAttr::MajorAxis
            | DxfAttr::Vtx0
            | DxfAttr::Vtx1
            | DxfAttr::Vtx2
            | DxfAttr::Vtx3 => return None,
        };
        Some(value)
    }
}

impl fmt::Display for DxfAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An attribute value
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Text(String),
    Int(i64),
    Float(f64),
    Vector(Vector3),
}

impl AttrValue {
    pub fn kind(&self) -> AttrKind {
        match self {
            AttrValue::Text(_) => AttrKind::Text,
            AttrValue::Int(_) => AttrKind::Int,
            AttrValue::Float(_) => AttrKind::Float,
            AttrValue::Vector(_) => AttrKind::Vector,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttrValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttrValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<Vector3> {
        match self {
            AttrValue::Vector(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        AttrValue::Float(v)
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        AttrValue::Int(v)
    }
}

impl From<i32> for AttrValue {
    fn from(v: i32) -> Self {
        AttrValue::Int(i64::from(v))
    }
}

impl From<Vector3> for AttrValue {
    fn from(v: Vector3) -> Self {
        AttrValue::Vector(v)
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Text(s)
    }
}

/// Decoded DXF attributes of one entity, in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DxfNamespace {
    attribs: IndexMap<DxfAttr, AttrValue>,
}

impl DxfNamespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if `attr` was set explicitly
    pub fn hasattr(&self, attr: DxfAttr) -> bool {
        self.attribs.contains_key(&attr)
    }

    /// Explicit value of `attr`, else its default
    pub fn get(&self, attr: DxfAttr) -> Option<AttrValue> {
        self.attribs
            .get(&attr)
            .cloned()
            .or_else(|| attr.default_value())
    }

    pub fn get_f64(&self, attr: DxfAttr) -> Option<f64> {
        self.get(attr).and_then(|v| v.as_f64())
    }

    pub fn get_vector(&self, attr: DxfAttr) -> Option<Vector3> {
        self.get(attr).and_then(|v| v.as_vector())
    }

    /// Set `attr`; integers are accepted for float attributes
    pub fn set(&mut self, attr: DxfAttr, value: impl Into<AttrValue>) -> Result<()> {
        let value = match (attr.kind(), value.into()) {
            (AttrKind::Float, AttrValue::Int(v)) => AttrValue::Float(v as f64),
            (kind, value) if value.kind() == kind => value,
            (kind, _) => {
                return Err(DxfError::InvalidAttributeValue {
                    attribute: attr.name(),
                    expected: kind.name(),
                })
            }
        };
        self.attribs.insert(attr, value);
        Ok(())
    }

    /// Remove `attr` if present
    pub fn discard(&mut self, attr: DxfAttr) {
        self.attribs.shift_remove(&attr);
    }

    pub fn iter(&self) -> impl Iterator<Item = (DxfAttr, &AttrValue)> {
        self.attribs.iter().map(|(attr, value)| (*attr, value))
    }

    pub fn len(&self) -> usize {
        self.attribs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attribs.is_empty()
    }
}
