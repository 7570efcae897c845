use crate::errors::{CoercionError, Result};
use crate::identity::IdentityResolver;
use crate::patch::{Mutation, Patch};
use crate::value::Variant;

use super::kind::Kind;

/// Typed access to one property of `T`, selected by its kind
pub(crate) trait Accessor<T>: Send + Sync {
    /// Current value rendered as a mutation value
    fn read(&self, obj: &T) -> Variant;

    /// Append the mutations turning `source`'s property into `target`'s
    fn diff(&self, source: &T, target: &T, path: &str, patch: &mut Patch);

    /// Apply one mutation
    ///
    /// `rest` holds the path segments below this property; it is only ever
    /// non-empty for nested references.
    fn apply(
        &self,
        obj: &mut T,
        rest: &[&str],
        mutation: &Mutation,
        resolver: &dyn IdentityResolver,
    ) -> Result<Outcome>;
}

/// What happened to a mutation that did not fail hard
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outcome {
    skipped: Vec<CoercionError>,
}

impl Outcome {
    pub(crate) fn skip(&mut self, reason: CoercionError) {
        self.skipped.push(reason);
    }

    pub(crate) fn skipped_one(reason: CoercionError) -> Self {
        Self {
            skipped: vec![reason],
        }
    }

    /// Values that could not be converted and were left out
    pub fn skipped(&self) -> &[CoercionError] {
        &self.skipped
    }

    /// `true` when every value carried by the mutation was taken
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// A registered property of a domain type
pub struct PropertyDescriptor<T> {
    pub(crate) name: &'static str,
    pub(crate) path_segment: &'static str,
    pub(crate) kind: Kind,
    pub(crate) sensitive: bool,
    pub(crate) access: Box<dyn Accessor<T>>,
}

impl<T> PropertyDescriptor<T> {
    /// Field name in the domain type
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Segment addressing this property in mutation paths
    pub fn path_segment(&self) -> &'static str {
        self.path_segment
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Whether mutation values for this property are redacted in logs
    pub fn is_sensitive(&self) -> bool {
        self.sensitive
    }

    pub fn get(&self, obj: &T) -> Variant {
        self.access.read(obj)
    }

    /// Replace the property with `value`
    ///
    /// Follows the same rules as a `Replace` mutation addressed to this
    /// property: a value that does not convert is reported in the outcome and
    /// leaves the property unchanged.
    ///
    /// # Errors
    ///
    /// Returns `ReferenceResolution` when an identity token in `value` does not
    /// resolve.
    pub fn set(
        &self,
        obj: &mut T,
        value: Variant,
        resolver: &dyn IdentityResolver,
    ) -> Result<Outcome> {
        let mutation = Mutation::replace(self.path_segment, value);
        self.access.apply(obj, &[], &mutation, resolver)
    }
}

impl<T> std::fmt::Debug for PropertyDescriptor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("name", &self.name)
            .field("path_segment", &self.path_segment)
            .field("kind", &self.kind)
            .field("sensitive", &self.sensitive)
            .finish()
    }
}
