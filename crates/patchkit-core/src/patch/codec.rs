//! Decoding structured input trees into domain instances.
//!
//! The engine does not own a wire format. A [`Codec`] turns an already
//! parsed tree into an instance of the target type; [`JsonCodec`] is the
//! serde-based implementation, configured explicitly at each call site.

use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::CodecError;
use crate::schema::Patchable;

/// Decoder from a structured input tree into a domain instance
pub trait Codec {
    type Error: std::error::Error;

    /// Decode `tree` into an instance of `T`
    ///
    /// # Errors
    ///
    /// Returns the codec's error when the tree does not describe a `T`.
    fn decode<T: Patchable + DeserializeOwned>(&self, tree: &Value) -> Result<T, Self::Error>;
}

/// serde-based codec for JSON trees
///
/// - `empty_string_as_null`: object members holding `""` are read as absent
/// - `reject_unknown_fields`: members the target type does not declare fail
///   the decode instead of being ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonCodec {
    pub empty_string_as_null: bool,
    pub reject_unknown_fields: bool,
}

impl Default for JsonCodec {
    fn default() -> Self {
        Self {
            empty_string_as_null: true,
            reject_unknown_fields: false,
        }
    }
}

impl JsonCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Codec rejecting unknown fields
    pub fn strict() -> Self {
        Self::default().with_reject_unknown_fields(true)
    }

    pub fn with_empty_string_as_null(mut self, enabled: bool) -> Self {
        self.empty_string_as_null = enabled;
        self
    }

    pub fn with_reject_unknown_fields(mut self, enabled: bool) -> Self {
        self.reject_unknown_fields = enabled;
        self
    }

    /// Read a JSON tree from a stream
    ///
    /// # Errors
    ///
    /// Returns `CodecError::Io` on read failure and `CodecError::Malformed`
    /// when the content is not JSON.
    pub fn read_tree<R: Read>(&self, reader: R) -> Result<Value, CodecError> {
        serde_json::from_reader(reader).map_err(|e| {
            if e.is_io() {
                CodecError::Io(e.into())
            } else {
                CodecError::Malformed {
                    type_name: "tree".to_string(),
                    message: e.to_string(),
                }
            }
        })
    }

    /// Read a JSON tree from a file
    ///
    /// # Errors
    ///
    /// Same as [`read_tree`](Self::read_tree), plus `CodecError::Io` when the
    /// file cannot be opened.
    pub fn read_tree_from_path(&self, path: &Path) -> Result<Value, CodecError> {
        let file = std::fs::File::open(path)?;
        self.read_tree(std::io::BufReader::new(file))
    }
}

fn blank_empty_strings(value: &mut Value) {
    match value {
        Value::Object(members) => {
            for member in members.values_mut() {
                if matches!(member, Value::String(s) if s.is_empty()) {
                    *member = Value::Null;
                } else {
                    blank_empty_strings(member);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(blank_empty_strings),
        _ => {}
    }
}

impl Codec for JsonCodec {
    type Error = CodecError;

    fn decode<T: Patchable + DeserializeOwned>(&self, tree: &Value) -> Result<T, CodecError> {
        let mut tree = tree.clone();
        if self.empty_string_as_null {
            blank_empty_strings(&mut tree);
        }

        let mut unknown_paths: Vec<String> = Vec::new();
        let decoded: T = serde_ignored::deserialize(tree, |p| {
            unknown_paths.push(p.to_string());
        })
        .map_err(|e| CodecError::Malformed {
            type_name: T::type_name().to_string(),
            message: e.to_string(),
        })?;

        if !unknown_paths.is_empty() {
            if self.reject_unknown_fields {
                return Err(CodecError::UnknownFields {
                    type_name: T::type_name().to_string(),
                    paths: unknown_paths,
                });
            }
            tracing::debug!(
                component = module_path!(),
                op = "decode",
                type_name = T::type_name(),
                unknown = ?unknown_paths,
                "ignored unknown fields"
            );
        }
        Ok(decoded)
    }
}
