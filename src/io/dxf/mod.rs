//! DXF tag layer: group code types and tagged values

mod tag_types;
mod tags;

pub use tag_types::{
    cast_tag_value, is_binary_flag, is_group_marker, is_hex_handle_code, is_point_code,
    is_point_tag, is_pointer_code, point_tuple, tag_type, TagType, TypeRule, TypeTable,
    APP_DATA_MARKER, BINARY_FLAGS, EXT_DATA_MARKER, GENERAL_MARKER, GROUP_MARKERS, HANDLE_CODES,
    HEX_HANDLE_CODES, MAX_GROUP_CODE, POINTER_CODES, POINT_CODES, SUBCLASS_MARKER, TYPE_RULES,
    TYPE_TABLE,
};
pub use tags::{compile_tags, format_float, strtag, DxfTag, DxfVertex, TagCompiler, TagValue};
