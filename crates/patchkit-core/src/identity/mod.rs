//! Identity-referenced objects and the resolver that looks them up.
//!
//! Identity collections and references never build objects themselves. A
//! token carried by a mutation is handed to an [`IdentityResolver`], which
//! returns the live object or nothing.

pub mod store;

use std::any::Any;
use std::sync::Arc;

pub use store::IdentityStore;

/// A domain object compared by a stable identity token (its uid)
pub trait Identifiable: Clone + Send + Sync + 'static {
    /// Type name the resolver is queried with
    const TYPE_NAME: &'static str;

    fn uid(&self) -> &str;
}

/// Lookup of live objects by type name and identity token
///
/// Implementations may block (a database, a remote cache); the engine calls
/// it at most once per token it needs to apply.
pub trait IdentityResolver {
    fn resolve(&self, type_name: &str, uid: &str) -> Option<Arc<dyn Any + Send + Sync>>;
}

/// Resolve a token and downcast the result to the expected type
///
/// An object registered under the right name but of another concrete type
/// counts as not found.
pub fn resolve_as<G: Identifiable>(resolver: &dyn IdentityResolver, uid: &str) -> Option<G> {
    let object = resolver.resolve(G::TYPE_NAME, uid)?;
    (*object).downcast_ref::<G>().cloned()
}

/// Resolver that knows no objects
#[derive(Debug, Clone, Copy, Default)]
pub struct NoObjects;

impl IdentityResolver for NoObjects {
    fn resolve(&self, _type_name: &str, _uid: &str) -> Option<Arc<dyn Any + Send + Sync>> {
        None
    }
}
