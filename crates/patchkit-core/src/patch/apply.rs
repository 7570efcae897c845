//! Replaying a patch against a target instance.
//!
//! Mutations are applied one at a time, in order, directly on the target.
//! Values that do not convert to the declared type are skipped and logged;
//! an unknown path or an unresolvable identity token stops the replay with
//! an error. Mutations applied before the failure stay applied.

use crate::core_types::redacted_debug;
use crate::core_types::schema::EVENT_SKIPPED;
use crate::errors::{PatchError, Result};
use crate::identity::IdentityResolver;
use crate::schema::{Kind, Outcome, Patchable};
use crate::{log_op_end, log_op_error, log_op_start};

use super::model::{Mutation, Patch};

/// Apply every mutation of `patch` to `target`
///
/// # Errors
///
/// - `PropertyNotFound` when a path segment names no registered property
/// - `ReferenceResolution` when an identity token does not resolve
///
/// Remaining mutations are not applied after an error.
pub fn apply<T: Patchable>(
    patch: &Patch,
    target: &mut T,
    resolver: &dyn IdentityResolver,
) -> Result<()> {
    log_op_start!(
        "apply",
        type_name = T::type_name(),
        mutation_count = patch.len() as u64
    );
    let start = std::time::Instant::now();

    let mut applied: u64 = 0;
    let mut skipped: u64 = 0;
    for mutation in patch {
        let outcome = apply_mutation(mutation, target, resolver).map_err(|e| {
            log_op_error!(
                "apply",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                type_name = T::type_name(),
                path = mutation.path.as_str(),
                applied = applied
            );
            e
        })?;
        if outcome.is_clean() {
            applied += 1;
        } else {
            skipped += outcome.skipped().len() as u64;
        }
    }

    log_op_end!(
        "apply",
        duration_ms = start.elapsed().as_millis() as u64,
        type_name = T::type_name(),
        applied = applied,
        skipped = skipped
    );
    Ok(())
}

/// Apply a single mutation to `target`
///
/// # Errors
///
/// Same as [`apply`].
pub fn apply_mutation<T: Patchable>(
    mutation: &Mutation,
    target: &mut T,
    resolver: &dyn IdentityResolver,
) -> Result<Outcome> {
    let segments: Vec<&str> = mutation.path.split('.').collect();
    apply_segments(target, &segments, mutation, resolver)
}

/// Walk `segments` through `target`'s schema and apply at the last one
pub(crate) fn apply_segments<T: Patchable>(
    target: &mut T,
    segments: &[&str],
    mutation: &Mutation,
    resolver: &dyn IdentityResolver,
) -> Result<Outcome> {
    let schema = T::schema();
    let not_found = || PatchError::PropertyNotFound {
        type_name: schema.type_name().to_string(),
        path: mutation.path.clone(),
    };

    let (head, rest) = segments.split_first().ok_or_else(not_found)?;
    let property = schema.property(head).ok_or_else(not_found)?;
    if !rest.is_empty() && property.kind() != Kind::NestedReference {
        return Err(not_found());
    }

    let outcome = property.access.apply(target, rest, mutation, resolver)?;

    if rest.is_empty() {
        let sensitive = property.is_sensitive();
        for reason in outcome.skipped() {
            // Decode errors can quote the rejected value
            let reason = if sensitive {
                format!("expected {}", reason.expected)
            } else {
                reason.to_string()
            };
            tracing::debug!(
                component = module_path!(),
                op = "apply",
                event = EVENT_SKIPPED,
                type_name = schema.type_name(),
                path = mutation.path.as_str(),
                operation = %mutation.operation,
                value = %redacted_debug(&mutation.value, sensitive),
                reason = %reason,
            );
        }
    }
    Ok(outcome)
}
