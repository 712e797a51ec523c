//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_BUILD_ID: &str = "build_id";

// Input identifiers
pub const FIELD_SIDE: &str = "side";
pub const FIELD_PATH_KEY: &str = "path_key";
pub const FIELD_SOURCE: &str = "source";

// Collection sizes
pub const FIELD_DOCUMENTS: &str = "documents";
pub const FIELD_IGNORED: &str = "ignored";
pub const FIELD_LEAVES: &str = "leaves";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
