//! I/O building blocks for the DXF tag stream
//!
//! Tokenizing text into `(code, value)` pairs and writing files are left to
//! the caller; this module decodes pairs into tags and formats tags as text.

pub mod dxf;
