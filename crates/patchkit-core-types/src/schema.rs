//! Canonical schema constants for structured logging and events
//!
//! Every event emitted by the diff/apply/parse operations uses these keys so
//! that log consumers and test captures can match on them.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";
pub const FIELD_TRACE_ID: &str = "trace_id";

// Patch identifiers
pub const FIELD_TYPE_NAME: &str = "type_name";
pub const FIELD_PATH: &str = "path";
pub const FIELD_OPERATION: &str = "operation";
pub const FIELD_VALUE: &str = "value";

// Counters
pub const FIELD_MUTATION_COUNT: &str = "mutation_count";
pub const FIELD_APPLIED: &str = "applied";
pub const FIELD_SKIPPED: &str = "skipped";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_SKIPPED: &str = "skipped";
