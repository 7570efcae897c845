//! Subcommands and the plumbing they share
//!
//! Every command reads JSON files, works on one of the sample domain types
//! selected with `--type`, and writes JSON to stdout or `--output`.

pub mod apply;
pub mod describe;
pub mod diff;
pub mod parse;

use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use patchkit_core::{Codec, JsonCodec};
use serde::de::DeserializeOwned;
use serde_json::Value;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Domain types the CLI can work on
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TypeArg {
    #[value(name = "dataElement")]
    DataElement,
    #[value(name = "dataElementGroup")]
    DataElementGroup,
    #[value(name = "user")]
    User,
}

/// Run a generic function for the domain type selected by a [`TypeArg`]
macro_rules! for_type {
    ($type_arg:expr, $func:ident($($arg:expr),* $(,)?)) => {
        match $type_arg {
            $crate::commands::TypeArg::DataElement => {
                $func::<patchkit_core::model::DataElement>($($arg),*)
            }
            $crate::commands::TypeArg::DataElementGroup => {
                $func::<patchkit_core::model::DataElementGroup>($($arg),*)
            }
            $crate::commands::TypeArg::User => $func::<patchkit_core::model::User>($($arg),*),
        }
    };
}
pub(crate) use for_type;

/// Decoding options shared by commands reading domain objects
#[derive(Debug, Clone, Args)]
pub struct CodecArgs {
    /// Reject fields the type does not declare
    #[arg(long)]
    pub strict: bool,

    /// Keep empty strings instead of reading them as absent
    #[arg(long)]
    pub keep_empty_strings: bool,
}

impl CodecArgs {
    pub fn codec(&self) -> JsonCodec {
        JsonCodec::new()
            .with_reject_unknown_fields(self.strict)
            .with_empty_string_as_null(!self.keep_empty_strings)
    }
}

/// Read a JSON document from a file
pub fn read_tree(codec: &JsonCodec, path: &Path) -> Result<Value, Box<dyn std::error::Error>> {
    codec
        .read_tree_from_path(path)
        .map_err(|e| format!("{}: {}", path.display(), e).into())
}

/// Read and decode a domain object from a file
pub fn read_object<T>(codec: &JsonCodec, path: &Path) -> Result<T, Box<dyn std::error::Error>>
where
    T: patchkit_core::Patchable + DeserializeOwned,
{
    let tree = read_tree(codec, path)?;
    Ok(codec.decode::<T>(&tree)?)
}

/// Print `value` as pretty JSON, to `output` when given
pub fn write_json<S: serde::Serialize>(value: &S, output: Option<&PathBuf>) -> CommandResult {
    let rendered = serde_json::to_string_pretty(value)?;
    match output {
        Some(path) => std::fs::write(path, rendered + "\n")?,
        None => println!("{}", rendered),
    }
    Ok(())
}
