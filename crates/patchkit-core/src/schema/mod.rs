//! Statically built property tables for patchable domain types.
//!
//! Each domain type registers its properties once through a
//! [`SchemaBuilder`], classifying every property into a [`Kind`]. The diff
//! engine and the patch applier never look at a domain type directly; they
//! walk its [`Schema`] and dispatch on the kind of each descriptor.

pub mod builder;
pub mod descriptor;
pub mod kind;
pub(crate) mod lens;
pub mod registry;

pub use builder::SchemaBuilder;
pub use descriptor::{Outcome, PropertyDescriptor};
pub use kind::Kind;
pub use registry::{describe, Patchable, Schema};
