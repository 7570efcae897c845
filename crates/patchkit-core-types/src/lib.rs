//! Core types shared across patchkit facilities
//!
//! This crate provides foundational types used by the error facility and
//! the logging facility of the patch engine:
//!
//! - **Correlation types**: RequestId, TraceId, RequestContext
//! - **Sensitive data**: Sensitive<T> marker for redacting mutation values
//! - **Schema constants**: Canonical field keys and event names

pub mod correlation;
pub mod schema;
pub mod sensitive;

pub use correlation::{RequestContext, RequestId, TraceId};
pub use sensitive::{redacted_debug, Sensitive};
