//! Facade bundling a resolver, a codec and request correlation.
//!
//! The free functions in [`crate::patch`] stay usable on their own; the
//! service adds canonical `ExError` results carrying correlation ids and a
//! span tying the diff/apply/parse events of one request together.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core_types::RequestContext;
use crate::errors::ExError;
use crate::identity::IdentityResolver;
use crate::patch::{self, Codec, JsonCodec, Patch};
use crate::schema::Patchable;

/// Entry point for diffing and applying patches against one resolver
pub struct PatchService<'a, C: Codec = JsonCodec> {
    resolver: &'a dyn IdentityResolver,
    codec: C,
    context: Option<RequestContext>,
}

impl<'a, C: Codec> PatchService<'a, C> {
    pub fn new(resolver: &'a dyn IdentityResolver, codec: C) -> Self {
        Self {
            resolver,
            codec,
            context: None,
        }
    }

    /// Attach correlation ids to every event and error of this service
    pub fn with_context(mut self, context: RequestContext) -> Self {
        self.context = Some(context);
        self
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    pub fn context(&self) -> Option<&RequestContext> {
        self.context.as_ref()
    }

    fn span(&self) -> tracing::Span {
        match &self.context {
            Some(ctx) => tracing::info_span!(
                "patch_service",
                request_id = %ctx.request_id,
                trace_id = ctx.trace_str()
            ),
            None => tracing::Span::none(),
        }
    }

    fn correlate(&self, err: ExError) -> ExError {
        match &self.context {
            Some(ctx) => {
                let err = err.with_request_id(ctx.request_id.clone());
                match &ctx.trace_id {
                    Some(trace_id) => err.with_trace_id(trace_id.clone()),
                    None => err,
                }
            }
            None => err,
        }
    }

    /// Patch turning `source` into `target`
    pub fn diff<T: Patchable>(&self, source: &T, target: &T) -> Patch {
        let _guard = self.span().entered();
        patch::diff(source, target)
    }

    /// Patch setting every property a structured input tree sets
    ///
    /// # Errors
    ///
    /// Returns the codec's error, mapped to `ExError`, when the tree does not
    /// decode.
    pub fn diff_tree<T>(&self, tree: &Value) -> Result<Patch, ExError>
    where
        T: Patchable + DeserializeOwned,
        C::Error: Into<ExError>,
    {
        let _guard = self.span().entered();
        patch::parse::<T, C>(tree, &self.codec).map_err(|e| self.correlate(e.into()))
    }

    /// Apply `patch` to `target` in place
    ///
    /// # Errors
    ///
    /// Returns `ExError` with kind `PropertyNotFound` or `ReferenceUnresolved`.
    /// Mutations before the failing one stay applied.
    pub fn apply<T: Patchable>(&self, patch: &Patch, target: &mut T) -> Result<(), ExError> {
        let _guard = self.span().entered();
        patch::apply(patch, target, self.resolver).map_err(|e| self.correlate(e.into()))
    }
}
