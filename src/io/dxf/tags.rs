//! DXF tags
//!
//! A tag is one decoded `(group code, value)` unit of the tag stream. Points
//! are spread over 2-3 records (`code`, `code + 10`, `code + 20`) in the
//! stream and are merged into a single [`DxfVertex`] by [`TagCompiler`];
//! serialization splits them again.

use std::fmt;
use std::iter::Peekable;

use tracing::trace;

use super::tag_types::{cast_tag_value, is_point_code, point_tuple};
use crate::error::{DxfError, Result};
use crate::types::Vector3;

/// Text form of a float that parses back to the same value
pub fn format_float(value: f64) -> String {
    format!("{value:?}")
}

/// Format one two-line record: the code right-aligned in a 3-character
/// field (wider codes are not truncated), then the value
pub fn strtag(code: i32, value: &impl fmt::Display) -> String {
    format!("{code:>3}\n{value}\n")
}

/// A decoded tag value
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    Text(String),
    Int(i64),
    Float(f64),
    /// 2 or 3 point components
    Point(Vec<f64>),
}

impl TagValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TagValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            TagValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            TagValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_point(&self) -> Option<&[f64]> {
        match self {
            TagValue::Point(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagValue::Text(s) => f.write_str(s),
            TagValue::Int(v) => write!(f, "{v}"),
            TagValue::Float(v) => f.write_str(&format_float(*v)),
            TagValue::Point(components) => {
                let parts: Vec<String> = components.iter().map(|c| format_float(*c)).collect();
                write!(f, "({})", parts.join(", "))
            }
        }
    }
}

impl From<&str> for TagValue {
    fn from(s: &str) -> Self {
        TagValue::Text(s.to_string())
    }
}

impl From<String> for TagValue {
    fn from(s: String) -> Self {
        TagValue::Text(s)
    }
}

impl From<i64> for TagValue {
    fn from(v: i64) -> Self {
        TagValue::Int(v)
    }
}

impl From<i32> for TagValue {
    fn from(v: i32) -> Self {
        TagValue::Int(i64::from(v))
    }
}

impl From<f64> for TagValue {
    fn from(v: f64) -> Self {
        TagValue::Float(v)
    }
}

impl From<Vec<f64>> for TagValue {
    fn from(v: Vec<f64>) -> Self {
        TagValue::Point(v)
    }
}

/// A 2D or 3D point tag
///
/// The component count is fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DxfVertex {
    code: i32,
    components: [f64; 3],
    len: u8,
}

impl DxfVertex {
    /// Create a vertex at base point code `code` from 2 or 3 components
    pub fn new(code: i32, components: impl IntoIterator<Item = f64>) -> Result<Self> {
        if !is_point_code(code) {
            return Err(DxfError::InvalidDxfCode(code));
        }
        let mut buffer = [0.0; 3];
        let mut len = 0usize;
        for component in components {
            if len == 3 {
                return Err(DxfError::Parse(format!(
                    "point at group code {code} has more than 3 components"
                )));
            }
            buffer[len] = component;
            len += 1;
        }
        if len < 2 {
            return Err(DxfError::Parse(format!(
                "point at group code {code} needs at least 2 components, got {len}"
            )));
        }
        Ok(Self {
            code,
            components: buffer,
            len: len as u8,
        })
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    /// Number of components, 2 or 3
    pub fn len(&self) -> usize {
        usize::from(self.len)
    }

    pub fn is_3d(&self) -> bool {
        self.len == 3
    }

    /// The present components
    pub fn components(&self) -> &[f64] {
        &self.components[..self.len()]
    }

    pub fn value(&self) -> TagValue {
        TagValue::Point(self.components().to_vec())
    }

    /// As a 3D vector, z is 0 for 2D points
    pub fn to_vector3(&self) -> Vector3 {
        Vector3::from(self.components)
    }

    /// One scalar tag per component at `code`, `code + 10`, `code + 20`
    pub fn dxftags(&self) -> impl Iterator<Item = DxfTag> + '_ {
        let code = self.code;
        [code, code + 10, code + 20]
            .into_iter()
            .zip(self.components().iter())
            .map(|(code, value)| DxfTag::new(code, *value))
    }

    pub fn dxfstr(&self) -> String {
        self.dxftags().map(|tag| tag.dxfstr()).collect()
    }
}

impl fmt::Display for DxfVertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A decoded tag: a scalar value or a merged point
#[derive(Debug, Clone)]
pub enum DxfTag {
    Scalar { code: i32, value: TagValue },
    Vertex(DxfVertex),
}

impl DxfTag {
    /// Create a scalar tag; `value` is stored as given
    pub fn new(code: i32, value: impl Into<TagValue>) -> Self {
        DxfTag::Scalar {
            code,
            value: value.into(),
        }
    }

    /// Create a vertex tag, see [`DxfVertex::new`]
    pub fn vertex(code: i32, components: impl IntoIterator<Item = f64>) -> Result<Self> {
        DxfVertex::new(code, components).map(DxfTag::Vertex)
    }

    pub fn code(&self) -> i32 {
        match self {
            DxfTag::Scalar { code, .. } => *code,
            DxfTag::Vertex(vertex) => vertex.code(),
        }
    }

    pub fn value(&self) -> TagValue {
        match self {
            DxfTag::Scalar { value, .. } => value.clone(),
            DxfTag::Vertex(vertex) => vertex.value(),
        }
    }

    pub fn is_vertex(&self) -> bool {
        matches!(self, DxfTag::Vertex(_))
    }

    /// Text records of this tag, one per point component for vertices
    pub fn dxfstr(&self) -> String {
        match self {
            DxfTag::Scalar { code, value } => strtag(*code, value),
            DxfTag::Vertex(vertex) => vertex.dxfstr(),
        }
    }
}

impl From<DxfVertex> for DxfTag {
    fn from(vertex: DxfVertex) -> Self {
        DxfTag::Vertex(vertex)
    }
}

impl PartialEq for DxfTag {
    fn eq(&self, other: &DxfTag) -> bool {
        self.code() == other.code() && self.value() == other.value()
    }
}

impl PartialEq<(i32, TagValue)> for DxfTag {
    fn eq(&self, other: &(i32, TagValue)) -> bool {
        self.code() == other.0 && self.value() == other.1
    }
}

impl fmt::Display for DxfTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.code(), self.value())
    }
}

/// Turns a flat `(code, raw value)` sequence into tags
///
/// A base point code consumes the directly following `code + 10` record
/// (required) and `code + 20` record (optional) into one vertex tag.
pub struct TagCompiler<I: Iterator> {
    pairs: Peekable<I>,
}

impl<I, S> TagCompiler<I>
where
    I: Iterator<Item = (i32, S)>,
    S: AsRef<str>,
{
    pub fn new(pairs: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            pairs: pairs.into_iter().peekable(),
        }
    }

    fn compile(&mut self, code: i32, raw: S) -> Result<DxfTag> {
        if !is_point_code(code) {
            return cast_tag_value(code, raw.as_ref()).map(|value| DxfTag::Scalar { code, value });
        }

        let mut components = vec![raw];
        match self.pairs.next_if(|(next, _)| *next == code + 10) {
            Some((_, y)) => components.push(y),
            None => {
                return Err(DxfError::Parse(format!(
                    "missing y-component for point at group code {code}"
                )))
            }
        }
        if let Some((_, z)) = self.pairs.next_if(|(next, _)| *next == code + 20) {
            components.push(z);
        }

        let vertex = DxfVertex::new(code, point_tuple(code, &components)?)?;
        trace!(code, len = vertex.len(), "compiled point tag");
        Ok(DxfTag::Vertex(vertex))
    }
}

impl<I, S> Iterator for TagCompiler<I>
where
    I: Iterator<Item = (i32, S)>,
    S: AsRef<str>,
{
    type Item = Result<DxfTag>;

    fn next(&mut self) -> Option<Self::Item> {
        let (code, raw) = self.pairs.next()?;
        Some(self.compile(code, raw))
    }
}

/// Compile all `(code, raw value)` pairs, stopping at the first error
pub fn compile_tags<I, S>(pairs: I) -> Result<Vec<DxfTag>>
where
    I: IntoIterator<Item = (i32, S)>,
    S: AsRef<str>,
{
    TagCompiler::new(pairs).collect()
}
