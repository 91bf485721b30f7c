//! Group code value types
//!
//! The value type of a DXF tag is determined by its group code alone. Codes
//! are assigned in bands (points, floats, integers, flags, handles), so the
//! table is described by ordered range rules and flattened once into a dense
//! lookup array covering every code of the format.
//!
//! Codes 20-39, 113-139, 211-239 and 1020-1059 are the y- and z-companions of
//! the point codes. They are registered as plain floats and must not be read
//! as standalone values; the tag compiler merges them into vertex tags.

use std::ops::Range;

use ahash::AHashSet;
use once_cell::sync::Lazy;
use tracing::trace;

use super::tags::{DxfTag, TagValue};
use crate::error::{DxfError, Result};

/// Decoder selected by a group code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TagType {
    /// Pass-through string (default for unregistered codes)
    #[default]
    Text,
    /// Signed integer, also used for booleans and flags
    Integer,
    /// Double-precision float
    Float,
    /// x-component of a 2D/3D point, companions at +10 and +20
    Point,
}

impl TagType {
    /// Decode a raw text value according to this type.
    ///
    /// A single raw value at a point code is its x-component and decodes
    /// as a float; whole points are assembled by [`point_tuple`].
    pub fn decode(self, code: i32, raw: &str) -> Result<TagValue> {
        match self {
            TagType::Text => Ok(TagValue::Text(raw.to_string())),
            TagType::Integer => raw
                .trim()
                .parse::<i64>()
                .map(TagValue::Int)
                .map_err(|_| invalid_value(code, raw, self)),
            TagType::Float | TagType::Point => parse_float(code, raw, self).map(TagValue::Float),
        }
    }
}

fn invalid_value(code: i32, raw: &str, expected: TagType) -> DxfError {
    DxfError::InvalidTagValue {
        code,
        value: raw.to_string(),
        expected,
    }
}

fn parse_float(code: i32, raw: &str, expected: TagType) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| invalid_value(code, raw, expected))
}

/// Highest group code covered by the dense type table
pub const MAX_GROUP_CODE: i32 = 1071;

/// A decoder and the half-open range of codes it applies to
pub type TypeRule = (TagType, Range<i32>);

/// Canonical rule list. Group codes < 0 are reserved for internal use and
/// are not part of any rule.
pub const TYPE_RULES: &[TypeRule] = &[
    (TagType::Point, 10..20),
    (TagType::Float, 20..60),
    (TagType::Integer, 60..100),
    // UCS definition
    (TagType::Point, 110..113),
    (TagType::Float, 113..150),
    (TagType::Integer, 160..170),
    (TagType::Integer, 170..180),
    // extrusion direction
    (TagType::Point, 210..211),
    (TagType::Float, 211..240),
    (TagType::Integer, 270..290),
    // bool 1=true 0=false
    (TagType::Integer, 290..300),
    (TagType::Integer, 370..390),
    (TagType::Integer, 400..410),
    (TagType::Integer, 420..430),
    (TagType::Integer, 440..460),
    (TagType::Float, 460..470),
    (TagType::Point, 1010..1020),
    (TagType::Float, 1020..1060),
    (TagType::Integer, 1060..1072),
];

/// Dense code-to-type table
#[derive(Debug, Clone)]
pub struct TypeTable {
    types: Box<[TagType]>,
}

impl TypeTable {
    /// Flatten `rules` applied in order; a later rule overrides an earlier
    /// one for the codes they share. Codes outside `0..=MAX_GROUP_CODE` are
    /// ignored.
    pub fn from_rules(rules: &[TypeRule]) -> Self {
        let mut types = vec![TagType::Text; MAX_GROUP_CODE as usize + 1];
        for (tag_type, codes) in rules {
            for code in codes.clone() {
                if let Some(slot) = usize::try_from(code).ok().and_then(|i| types.get_mut(i)) {
                    *slot = *tag_type;
                }
            }
        }
        Self {
            types: types.into_boxed_slice(),
        }
    }

    /// Type of `code`, text for every code without a rule
    pub fn get(&self, code: i32) -> TagType {
        usize::try_from(code)
            .ok()
            .and_then(|i| self.types.get(i))
            .copied()
            .unwrap_or_default()
    }
}

/// The canonical type table built from [`TYPE_RULES`]
pub static TYPE_TABLE: Lazy<TypeTable> = Lazy::new(|| TypeTable::from_rules(TYPE_RULES));

pub const GENERAL_MARKER: i32 = 0;
pub const SUBCLASS_MARKER: i32 = 100;
pub const APP_DATA_MARKER: i32 = 102;
pub const EXT_DATA_MARKER: i32 = 1001;

fn code_set(codes: impl IntoIterator<Item = i32>) -> AHashSet<i32> {
    codes.into_iter().collect()
}

/// Base codes of 2D/3D points (x-component)
pub static POINT_CODES: Lazy<AHashSet<i32>> =
    Lazy::new(|| code_set((10..20).chain(110..113).chain([210]).chain(1010..1020)));

pub static GROUP_MARKERS: Lazy<AHashSet<i32>> = Lazy::new(|| {
    code_set([
        GENERAL_MARKER,
        SUBCLASS_MARKER,
        APP_DATA_MARKER,
        EXT_DATA_MARKER,
    ])
});

pub static BINARY_FLAGS: Lazy<AHashSet<i32>> = Lazy::new(|| code_set([70, 90]));

/// Handle of the object itself
pub static HANDLE_CODES: Lazy<AHashSet<i32>> = Lazy::new(|| code_set([5, 105]));

/// Hex-encoded references to other objects
pub static POINTER_CODES: Lazy<AHashSet<i32>> =
    Lazy::new(|| code_set((320..370).chain(390..400).chain([480, 481, 1005])));

pub static HEX_HANDLE_CODES: Lazy<AHashSet<i32>> = Lazy::new(|| {
    HANDLE_CODES
        .iter()
        .chain(POINTER_CODES.iter())
        .copied()
        .collect()
});

/// Decoder for `code`; never fails, unknown codes are text
pub fn tag_type(code: i32) -> TagType {
    TYPE_TABLE.get(code)
}

/// Decode `raw` according to the type of `code`
pub fn cast_tag_value(code: i32, raw: &str) -> Result<TagValue> {
    if !(0..=MAX_GROUP_CODE).contains(&code) {
        trace!(code, "group code outside type table, decoding as text");
    }
    tag_type(code).decode(code, raw)
}

/// Decode the raw components of the point at base code `code`
pub fn point_tuple<S: AsRef<str>>(code: i32, components: &[S]) -> Result<Vec<f64>> {
    components
        .iter()
        .map(|raw| parse_float(code, raw.as_ref(), TagType::Point))
        .collect()
}

pub fn is_point_code(code: i32) -> bool {
    POINT_CODES.contains(&code)
}

pub fn is_pointer_code(code: i32) -> bool {
    POINTER_CODES.contains(&code)
}

pub fn is_hex_handle_code(code: i32) -> bool {
    HEX_HANDLE_CODES.contains(&code)
}

pub fn is_group_marker(code: i32) -> bool {
    GROUP_MARKERS.contains(&code)
}

pub fn is_binary_flag(code: i32) -> bool {
    BINARY_FLAGS.contains(&code)
}

pub fn is_point_tag(tag: &DxfTag) -> bool {
    is_point_code(tag.code())
}
