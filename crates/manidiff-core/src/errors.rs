use crate::model::Side;
use thiserror::Error;

/// Result type alias using ManifestError
pub type Result<T> = std::result::Result<T, ManifestError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and CLI exit reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Document validation (recoverable during a build)
    InvalidInput,
    MissingField,
    InvalidManifest,

    // Presentation-facing
    NotFound,
    InvalidSelection,

    // Build (fatal)
    Decode,
    Io,
    StorageRootMissing,
    Serialization,

    // Configuration
    Config,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::InvalidManifest => "ERR_INVALID_MANIFEST",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::InvalidSelection => "ERR_INVALID_SELECTION",
            ExErrorKind::Decode => "ERR_DECODE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::StorageRootMissing => "ERR_STORAGE_ROOT_MISSING",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Config => "ERR_CONFIG",
        }
    }

    /// Whether a build may continue after an error of this kind
    ///
    /// Only per-document validation failures are absorbed by the build; every
    /// other kind aborts it.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ExErrorKind::MissingField | ExErrorKind::InvalidManifest
        )
    }
}

/// Canonical structured error type
///
/// Carries a classification plus the context needed to tell the user what
/// failed: the operation, which input side, and the filesystem path involved.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    side: Option<Side>,
    path: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            side: None,
            path: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add input side context
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    /// Add filesystem path or locator context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the input side that failed, if any
    pub fn side(&self) -> Option<Side> {
        self.side
    }

    /// Get the path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(side) = self.side {
            write!(f, " (side: {})", side)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for manifest indexing operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ManifestError {
    // ===== Validation Errors =====
    /// A required identity field is absent, empty, or not a string
    #[error("Manifest is missing required field: {field}")]
    MissingField { field: String },

    /// The document is not a mapping at the top level
    #[error("Manifest document is not a mapping")]
    NotAMapping,

    /// An identity value cannot be used as a storage path segment
    #[error("Manifest {field} '{value}' cannot be used as a path segment")]
    UnsafeSegment { field: String, value: String },

    // ===== Build Errors =====
    /// A whole input stream could not be read or parsed
    #[error("Failed to decode {side} input {source_name}: {message}")]
    Decode {
        side: Side,
        source_name: String,
        message: String,
    },

    /// Directory creation, file write, or deletion failed
    #[error("I/O error during {op} at {path}: {message}")]
    Io {
        op: String,
        path: String,
        message: String,
    },

    /// The storage root was removed while still in use
    #[error("Storage root does not exist: {path}")]
    StorageRootMissing { path: String },

    /// Rendering a document to text failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    // ===== Presentation Errors =====
    /// A locator's backing file no longer exists
    #[error("Resource not found: {locator}")]
    NotFound { locator: String },

    /// No index node is registered under the given path key
    #[error("No index node at path: {path_key}")]
    NodeNotFound { path_key: String },

    /// The selected nodes cannot be compared
    #[error("Cannot compare selected items: {reason}")]
    InvalidSelection { reason: String },

    // ===== Configuration Errors =====
    /// A settings file could not be read or parsed
    #[error("Invalid configuration: {message}")]
    Config { message: String },
}

/// Conversion from ManifestError to ExError
impl From<ManifestError> for ExError {
    fn from(err: ManifestError) -> Self {
        let message = err.to_string();
        match err {
            ManifestError::MissingField { .. } => ExError::new(ExErrorKind::MissingField)
                .with_op("validate")
                .with_message(message),

            ManifestError::NotAMapping | ManifestError::UnsafeSegment { .. } => {
                ExError::new(ExErrorKind::InvalidManifest)
                    .with_op("validate")
                    .with_message(message)
            }

            ManifestError::Decode {
                side, source_name, ..
            } => ExError::new(ExErrorKind::Decode)
                .with_op("decode")
                .with_side(side)
                .with_path(source_name)
                .with_message(message),

            ManifestError::Io { op, path, .. } => ExError::new(ExErrorKind::Io)
                .with_op(op)
                .with_path(path)
                .with_message(message),

            ManifestError::StorageRootMissing { path } => {
                ExError::new(ExErrorKind::StorageRootMissing)
                    .with_path(path)
                    .with_message(message)
            }

            ManifestError::Serialization { .. } => ExError::new(ExErrorKind::Serialization)
                .with_op("render")
                .with_message(message),

            ManifestError::NotFound { locator } => ExError::new(ExErrorKind::NotFound)
                .with_path(locator)
                .with_message(message),

            ManifestError::NodeNotFound { path_key } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("lookup")
                .with_path(path_key)
                .with_message(message),

            ManifestError::InvalidSelection { .. } => {
                ExError::new(ExErrorKind::InvalidSelection).with_message(message)
            }

            ManifestError::Config { .. } => ExError::new(ExErrorKind::Config)
                .with_op("load_settings")
                .with_message(message),
        }
    }
}

impl From<serde_yaml::Error> for ManifestError {
    fn from(err: serde_yaml::Error) -> Self {
        ManifestError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ExErrorKind::MissingField, "ERR_MISSING_FIELD"),
            (ExErrorKind::InvalidManifest, "ERR_INVALID_MANIFEST"),
            (ExErrorKind::Decode, "ERR_DECODE"),
            (ExErrorKind::Io, "ERR_IO"),
            (ExErrorKind::NotFound, "ERR_NOT_FOUND"),
            (ExErrorKind::InvalidSelection, "ERR_INVALID_SELECTION"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_only_validation_kinds_are_recoverable() {
        assert!(ExErrorKind::MissingField.is_recoverable());
        assert!(ExErrorKind::InvalidManifest.is_recoverable());
        assert!(!ExErrorKind::Decode.is_recoverable());
        assert!(!ExErrorKind::Io.is_recoverable());
    }

    #[test]
    fn test_decode_conversion_keeps_side() {
        let err = ManifestError::Decode {
            side: Side::Right,
            source_name: "b.yaml".to_string(),
            message: "bad indent".to_string(),
        };

        let ex_err: ExError = err.into();

        assert_eq!(ex_err.kind(), ExErrorKind::Decode);
        assert_eq!(ex_err.side(), Some(Side::Right));
        assert_eq!(ex_err.path(), Some("b.yaml"));
        assert!(ex_err.message().contains("bad indent"));
    }

    #[test]
    fn test_display_includes_code_and_context() {
        let err = ExError::new(ExErrorKind::Io)
            .with_op("write_rendering")
            .with_path("/tmp/x")
            .with_message("disk full");

        let shown = err.to_string();
        assert!(shown.starts_with("[ERR_IO]"));
        assert!(shown.contains("write_rendering"));
        assert!(shown.contains("/tmp/x"));
    }
}
