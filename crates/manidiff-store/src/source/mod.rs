//! Input stream decoding
//!
//! Provides:
//! - `ManifestSource`: a named input (file path or in-memory text)
//! - Multi-document YAML decoding with empty-document accounting

pub mod decode;

pub use decode::{decode_file, decode_str, DecodedStream, ManifestSource};
