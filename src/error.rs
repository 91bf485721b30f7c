//! Error types for dxf-upright

use thiserror::Error;

use crate::io::dxf::TagType;

/// Main error type for dxf-upright operations
#[derive(Debug, Error)]
pub enum DxfError {
    /// A raw value could not be converted to the type its group code mandates
    #[error("Invalid value for group code {code}: {value:?} is not a valid {expected:?}")]
    InvalidTagValue {
        code: i32,
        value: String,
        expected: TagType,
    },

    /// Group code not valid in this position
    #[error("Invalid DXF code: {0}")]
    InvalidDxfCode(i32),

    /// Structural error in a tag stream (e.g. incomplete point)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid entity type
    #[error("Invalid entity type: {0}")]
    InvalidEntityType(String),

    /// Attribute value of the wrong kind
    #[error("Invalid value for attribute {attribute}: expected {expected}")]
    InvalidAttributeValue {
        attribute: &'static str,
        expected: &'static str,
    },

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for dxf-upright operations
pub type Result<T> = std::result::Result<T, DxfError>;

impl From<String> for DxfError {
    fn from(s: String) -> Self {
        DxfError::Custom(s)
    }
}

impl From<&str> for DxfError {
    fn from(s: &str) -> Self {
        DxfError::Custom(s.to_string())
    }
}
