//! Property-by-property comparison of two instances.
//!
//! The diff is sparse: unchanged properties emit nothing. Each descriptor
//! contributes its own mutations according to its kind, and nested
//! references recurse with their path segment as prefix.

use crate::schema::Patchable;
use crate::{log_op_end, log_op_start};

use super::model::Patch;

/// Compute the patch turning `source` into `target`
///
/// Applying the result to a copy of `source` yields an object equal to
/// `target` on every registered property.
pub fn diff<T: Patchable>(source: &T, target: &T) -> Patch {
    log_op_start!("diff", type_name = T::type_name());
    let start = std::time::Instant::now();

    let mut patch = Patch::new();
    diff_properties(source, target, None, &mut patch);

    log_op_end!(
        "diff",
        duration_ms = start.elapsed().as_millis() as u64,
        type_name = T::type_name(),
        mutation_count = patch.len() as u64
    );
    patch
}

pub(crate) fn diff_properties<T: Patchable>(
    source: &T,
    target: &T,
    prefix: Option<&str>,
    patch: &mut Patch,
) {
    for property in T::schema().properties() {
        let path = match prefix {
            Some(prefix) => format!("{}.{}", prefix, property.path_segment()),
            None => property.path_segment().to_string(),
        };
        property.access.diff(source, target, &path, patch);
    }
}
