//! Sample domain model: data elements, their groups, and users.
//!
//! Every type derives `Default` (the zero value parsed input is diffed
//! against) and serde with camelCase names, and registers a schema exposing
//! the same camelCase names as mutation path segments. The `id` field is an
//! identity token and never a patchable property.

pub mod data_element;
pub mod data_element_group;
pub mod de;
pub mod enums;
pub mod sharing;
pub mod user;

pub use data_element::DataElement;
pub use data_element_group::DataElementGroup;
pub use enums::{AggregationType, DataElementDomain, ValueType};
pub use sharing::{UserAccess, UserGroupAccess};
pub use user::{User, UserCredentials, UserGroup};
