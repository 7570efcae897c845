//! Structured logging facility for the patch engine
//!
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use patchkit_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```
//!
//! `diff`, `apply` and `parse` own their start/end boundaries; callers wrap
//! them in their own ops rather than re-logging the same op name.

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
