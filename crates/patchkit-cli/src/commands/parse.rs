//! Parse command
//!
//! Usage: patchkit parse --type <T> <INPUT> [--output <FILE>]
//!
//! Prints the patch setting every property the input sets away from the
//! type's defaults.

use clap::Args;
use serde::de::DeserializeOwned;
use std::path::PathBuf;

use patchkit_core::Patchable;

use super::{for_type, read_tree, write_json, CodecArgs, CommandResult, TypeArg};

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Domain type the input describes
    #[arg(short = 't', long = "type", value_enum)]
    pub type_arg: TypeArg,

    /// Structured input document
    pub input: PathBuf,

    #[command(flatten)]
    pub codec: CodecArgs,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute parse command
pub fn execute(args: ParseArgs) -> CommandResult {
    for_type!(args.type_arg, run(&args))
}

fn run<T: Patchable + DeserializeOwned>(args: &ParseArgs) -> CommandResult {
    let codec = args.codec.codec();
    let tree = read_tree(&codec, &args.input)?;

    let patch = patchkit_core::parse::<T, _>(&tree, &codec)?;
    write_json(&patch, args.output.as_ref())
}
