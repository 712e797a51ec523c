//! Multi-document YAML decoding
//!
//! A stream that fails to read or parse is fatal for the build. Empty
//! documents inside an otherwise valid stream are skipped and counted.

use crate::errors::{decode_error, Result};
use manidiff_core::Side;
use serde::Deserialize;
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// A named input collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestSource {
    /// A YAML file on disk
    File(PathBuf),
    /// YAML text held in memory, with a display name
    Text { name: String, content: String },
}

impl ManifestSource {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        ManifestSource::File(path.into())
    }

    pub fn text(name: impl Into<String>, content: impl Into<String>) -> Self {
        ManifestSource::Text {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Display name used in logs and errors
    pub fn name(&self) -> String {
        match self {
            ManifestSource::File(path) => path.display().to_string(),
            ManifestSource::Text { name, .. } => name.clone(),
        }
    }

    /// Decode this source as the given side
    pub fn decode(&self, side: Side) -> Result<DecodedStream> {
        match self {
            ManifestSource::File(path) => decode_file(path, side),
            ManifestSource::Text { name, content } => decode_str(content, side, name),
        }
    }
}

/// Documents decoded from one input stream
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedStream {
    pub side: Side,
    pub source_name: String,
    /// Non-empty documents in stream order
    pub documents: Vec<Value>,
    /// Number of null/empty documents skipped
    pub empty_ignored: usize,
}

/// Read and decode a YAML file
///
/// # Errors
///
/// Returns a `Decode` error tagged with `side` if the file cannot be read as
/// UTF-8 or does not parse.
pub fn decode_file(path: &Path, side: Side) -> Result<DecodedStream> {
    let source_name = path.display().to_string();
    let content = fs::read_to_string(path)
        .map_err(|e| decode_error(side, &source_name, format!("Failed to read file: {}", e)))?;

    decode_str(&content, side, &source_name)
}

/// Decode YAML text containing one or more `---`-separated documents
///
/// # Errors
///
/// Returns a `Decode` error tagged with `side` on the first document that
/// fails to parse; no partial result is returned.
pub fn decode_str(content: &str, side: Side, source_name: &str) -> Result<DecodedStream> {
    let mut documents = Vec::new();
    let mut empty_ignored = 0;

    // serde_yaml yields one null document for blank input
    let decoder = (!content.trim().is_empty()).then(|| serde_yaml::Deserializer::from_str(content));

    for document in decoder.into_iter().flatten() {
        let value = Value::deserialize(document)
            .map_err(|e| decode_error(side, source_name, format!("YAML parse error: {}", e)))?;

        if value.is_null() {
            tracing::warn!(
                op = "decode",
                side = %side,
                source = source_name,
                "An empty document has been included in {} and will be ignored",
                source_name
            );
            empty_ignored += 1;
            continue;
        }
        documents.push(value);
    }

    tracing::info!(
        op = "decode",
        side = %side,
        source = source_name,
        documents = documents.len(),
        ignored = empty_ignored,
        "{} objects found, and {} ignored in {}",
        documents.len(),
        empty_ignored,
        source_name
    );

    Ok(DecodedStream {
        side,
        source_name: source_name.to_string(),
        documents,
        empty_ignored,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use manidiff_core::ExErrorKind;

    #[test]
    fn test_decode_multiple_documents() {
        let yaml = "apiVersion: v1\nkind: ConfigMap\nmetadata:\n  name: a\n---\n\
                    apiVersion: v1\nkind: Secret\nmetadata:\n  name: b\n";

        let stream = decode_str(yaml, Side::Left, "a.yaml").unwrap();

        assert_eq!(stream.documents.len(), 2);
        assert_eq!(stream.empty_ignored, 0);
        assert_eq!(stream.documents[1]["kind"].as_str(), Some("Secret"));
    }

    #[test]
    fn test_null_documents_are_counted_not_kept() {
        let yaml = "kind: A\n---\n~\n---\nkind: B\n";

        let stream = decode_str(yaml, Side::Right, "b.yaml").unwrap();

        assert_eq!(stream.documents.len(), 2);
        assert_eq!(stream.empty_ignored, 1);
    }

    #[test]
    fn test_blank_stream_has_no_documents() {
        for content in ["", "\n", "  \n\t\n"] {
            let stream = decode_str(content, Side::Left, "empty.yaml").unwrap();

            assert!(stream.documents.is_empty());
            assert_eq!(stream.empty_ignored, 0, "input {:?}", content);
        }
    }

    #[test]
    fn test_parse_failure_names_side() {
        let yaml = "kind: A\n---\nkey: [unclosed\n";

        let err = decode_str(yaml, Side::Right, "b.yaml").unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::Decode);
        assert_eq!(err.side(), Some(Side::Right));
        assert_eq!(err.path(), Some("b.yaml"));
    }

    #[test]
    fn test_missing_file_is_decode_failure() {
        let err = decode_file(Path::new("/nonexistent/manifests.yaml"), Side::Left).unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::Decode);
        assert_eq!(err.side(), Some(Side::Left));
    }

    #[test]
    fn test_text_source_name() {
        let source = ManifestSource::text("inline", "kind: A\n");
        assert_eq!(source.name(), "inline");
        assert_eq!(source.decode(Side::Left).unwrap().documents.len(), 1);
    }
}
