//! patchkit core - reflection-free object diff and patch engine
//!
//! This crate computes and applies structural patches over in-memory domain
//! objects:
//! - Statically built property schemas, one per domain type, classifying
//!   each property by kind
//! - A sparse diff producing an ordered list of mutations
//! - A patch applier with soft value coercion and identity resolution
//! - Structured input to patch, by diffing against a type's zero value
//! - A sample domain model (data elements, groups, users)
//!
//! ```
//! use patchkit_core::model::{DataElement, DataElementGroup};
//! use patchkit_core::{apply, IdentityStore, Mutation, Patch, Variant};
//!
//! let store = IdentityStore::new()
//!     .with(DataElementGroup::new("groupC"))
//!     .with(DataElementGroup::new("groupD"));
//!
//! let patch = Patch::new()
//!     .add_mutation(Mutation::replace("name", "Updated Name"))
//!     .add_mutation(Mutation::addition("dataElementGroups", Variant::identity("groupC")))
//!     .add_mutation(Mutation::addition("dataElementGroups", Variant::identity("groupD")));
//!
//! let mut element = DataElement::default();
//! apply(&patch, &mut element, &store).unwrap();
//!
//! assert_eq!(element.name.as_deref(), Some("Updated Name"));
//! assert_eq!(element.groups.len(), 2);
//! ```

pub use patchkit_core_types as core_types;

pub mod errors;
pub mod identity;
pub mod logging_facility;
pub mod model;
pub mod patch;
pub mod schema;
pub mod service;
pub mod value;

// Re-export commonly used types
pub use errors::{CodecError, CoercionError, ExError, ExErrorKind, PatchError, Result};
pub use identity::{Identifiable, IdentityResolver, IdentityStore};
pub use patch::{apply, diff, parse, Codec, JsonCodec, Mutation, Operation, Patch};
pub use schema::{describe, Kind, Patchable, PropertyDescriptor, Schema};
pub use service::PatchService;
pub use value::{Coerce, Scalar, Variant};
