//! Structured input to patch, by diffing against the zero value.
//!
//! No property-specific parsing happens here: the tree is decoded into an
//! instance by the codec and the diff engine does the rest, so a patch
//! from input carries exactly the properties the input set away from their
//! defaults.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::schema::Patchable;
use crate::{log_op_end, log_op_start};

use super::codec::Codec;
use super::diff::diff_properties;
use super::model::Patch;

/// Derive a patch from a structured input tree
///
/// # Errors
///
/// Returns the codec's error unchanged when the tree does not decode.
pub fn parse<T, C>(tree: &Value, codec: &C) -> Result<Patch, C::Error>
where
    T: Patchable + DeserializeOwned,
    C: Codec,
{
    log_op_start!("parse", type_name = T::type_name());
    let start = std::time::Instant::now();

    let decoded: T = codec.decode(tree).map_err(|e| {
        tracing::error!(
            component = module_path!(),
            op = "parse",
            event = crate::core_types::schema::EVENT_END_ERROR,
            duration_ms = start.elapsed().as_millis() as u64,
            type_name = T::type_name(),
            error = %e,
        );
        e
    })?;

    let mut patch = Patch::new();
    diff_properties(&T::default(), &decoded, None, &mut patch);

    log_op_end!(
        "parse",
        duration_ms = start.elapsed().as_millis() as u64,
        type_name = T::type_name(),
        mutation_count = patch.len() as u64
    );
    Ok(patch)
}
