//! Diff command
//!
//! Usage: patchkit diff --type <T> <SOURCE> <TARGET> [--output <FILE>]

use clap::Args;
use serde::de::DeserializeOwned;
use std::path::PathBuf;

use patchkit_core::Patchable;

use super::{for_type, read_object, write_json, CodecArgs, CommandResult, TypeArg};

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Domain type of both documents
    #[arg(short = 't', long = "type", value_enum)]
    pub type_arg: TypeArg,

    /// Document the patch starts from
    pub source: PathBuf,

    /// Document the patch leads to
    pub target: PathBuf,

    #[command(flatten)]
    pub codec: CodecArgs,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute diff command
pub fn execute(args: DiffArgs) -> CommandResult {
    for_type!(args.type_arg, run(&args))
}

fn run<T: Patchable + DeserializeOwned>(args: &DiffArgs) -> CommandResult {
    let codec = args.codec.codec();
    let source: T = read_object(&codec, &args.source)?;
    let target: T = read_object(&codec, &args.target)?;

    let patch = patchkit_core::diff(&source, &target);
    write_json(&patch, args.output.as_ref())
}
