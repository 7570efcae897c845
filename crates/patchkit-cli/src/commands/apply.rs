//! Apply command
//!
//! Usage: patchkit apply --type <T> --patch <PATCH> <TARGET> [--objects <FILE>] [--output <FILE>]
//!
//! `--objects` names a JSON document holding the objects identity tokens
//! resolve to, keyed by type name:
//!
//! ```json
//! { "dataElementGroup": [{ "id": "groupC", "name": "Group C" }], "user": [] }
//! ```

use clap::Args;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::{Path, PathBuf};

use patchkit_core::model::{DataElement, DataElementGroup, User, UserGroup};
use patchkit_core::{Identifiable, IdentityStore, Patch, Patchable};

use super::{for_type, read_object, read_tree, write_json, CodecArgs, CommandResult, TypeArg};

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Domain type of the target document
    #[arg(short = 't', long = "type", value_enum)]
    pub type_arg: TypeArg,

    /// Patch document, as printed by `diff` or `parse`
    #[arg(short, long)]
    pub patch: PathBuf,

    /// Document the patch is applied to
    pub target: PathBuf,

    /// Objects identity tokens resolve to
    #[arg(long)]
    pub objects: Option<PathBuf>,

    #[command(flatten)]
    pub codec: CodecArgs,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute apply command
pub fn execute(args: ApplyArgs) -> CommandResult {
    for_type!(args.type_arg, run(&args))
}

fn run<T>(args: &ApplyArgs) -> CommandResult
where
    T: Patchable + DeserializeOwned + serde::Serialize,
{
    let codec = args.codec.codec();
    let patch: Patch = serde_json::from_value(read_tree(&codec, &args.patch)?)
        .map_err(|e| format!("{}: invalid patch: {}", args.patch.display(), e))?;
    let mut target: T = read_object(&codec, &args.target)?;

    let store = match &args.objects {
        Some(path) => load_objects(path)?,
        None => IdentityStore::new(),
    };

    patchkit_core::apply(&patch, &mut target, &store)?;
    write_json(&target, args.output.as_ref())
}

fn insert_all<G>(store: &mut IdentityStore, items: &Value) -> CommandResult
where
    G: Identifiable + DeserializeOwned,
{
    let objects: Vec<G> = serde_json::from_value(items.clone())
        .map_err(|e| format!("invalid {} objects: {}", G::TYPE_NAME, e))?;
    for object in objects {
        store.insert(object);
    }
    Ok(())
}

/// Build an identity store from an objects document
pub fn load_objects(path: &Path) -> Result<IdentityStore, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    let document: Value = serde_json::from_str(&content)?;
    let Value::Object(sections) = document else {
        return Err(format!("{}: expected an object keyed by type name", path.display()).into());
    };

    let mut store = IdentityStore::new();
    for (type_name, items) in &sections {
        match type_name.as_str() {
            "dataElement" => insert_all::<DataElement>(&mut store, items)?,
            "dataElementGroup" => insert_all::<DataElementGroup>(&mut store, items)?,
            "user" => insert_all::<User>(&mut store, items)?,
            "userGroup" => insert_all::<UserGroup>(&mut store, items)?,
            other => return Err(format!("unknown object type '{}'", other).into()),
        }
    }
    Ok(store)
}
