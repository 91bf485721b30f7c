//! # dxf-upright
//!
//! Low-level DXF tag model and OCS normalization.
//!
//! ## Features
//!
//! - Group code type registry: every group code resolves to exactly one
//!   value decoder (text, integer, float or point)
//! - Scalar and vertex tags, with points merged from and split back into
//!   their `code`, `code + 10`, `code + 20` records
//! - Upright: rewrite CIRCLE, ARC, ELLIPSE, SOLID, TRACE and LWPOLYLINE
//!   entities with an inverted extrusion vector (0, 0, -1) into the WCS
//!   aligned OCS
//!
//! ## Quick Start
//!
//! ```rust
//! use dxf_upright::io::dxf::{compile_tags, TagValue};
//! use dxf_upright::entities::{DxfAttr, DxfEntity, EntityKind};
//! use dxf_upright::{upright, Vector3};
//!
//! let tags = compile_tags([(10, "1.0"), (20, "2.0"), (30, "3.0")])?;
//! assert_eq!(tags[0], (10, TagValue::Point(vec![1.0, 2.0, 3.0])));
//! assert_eq!(tags[0].dxfstr(), " 10\n1.0\n 20\n2.0\n 30\n3.0\n");
//!
//! let mut arc = DxfEntity::new(EntityKind::Arc)
//!     .with_attr(DxfAttr::Extrusion, Vector3::new(0.0, 0.0, -1.0))?
//!     .with_attr(DxfAttr::StartAngle, 30.0)?
//!     .with_attr(DxfAttr::EndAngle, 120.0)?;
//! upright(&mut arc);
//! assert_eq!(arc.dxf.get_f64(DxfAttr::StartAngle), Some(60.0));
//! # Ok::<(), dxf_upright::DxfError>(())
//! ```

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod entities;
pub mod error;
pub mod io;
pub mod types;
pub mod upright;

// Re-export commonly used types
pub use error::{DxfError, Result};
pub use types::{Ocs, Vector2, Vector3};

pub use entities::{DxfAttr, DxfEntity, DxfNamespace, EntityKind};
pub use io::dxf::{DxfTag, DxfVertex, TagType, TagValue};
pub use upright::{upright, upright_all, upright_all_par, Upright, UprightConfiguration};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
