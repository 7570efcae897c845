//! Patches: the mutation model and the operations producing and consuming it.
//!
//! - [`diff`](diff::diff) compares two instances and emits a sparse [`Patch`]
//! - [`apply`](apply::apply) replays a patch against a target in place
//! - [`parse`](parse::parse) derives a patch from a structured input tree by
//!   diffing the type's zero value against the decoded tree

pub mod apply;
pub mod codec;
pub mod diff;
pub mod model;
pub mod parse;

pub use apply::{apply, apply_mutation};
pub use codec::{Codec, JsonCodec};
pub use diff::diff;
pub use model::{Mutation, Operation, Patch};
pub use parse::parse;
