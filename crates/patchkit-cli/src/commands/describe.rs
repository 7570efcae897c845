//! Describe command
//!
//! Usage: patchkit describe --type <T>

use clap::Args;

use patchkit_core::{describe, Patchable};

use super::{for_type, CommandResult, TypeArg};

#[derive(Debug, Args)]
pub struct DescribeArgs {
    /// Domain type to describe
    #[arg(short = 't', long = "type", value_enum)]
    pub type_arg: TypeArg,
}

/// Execute describe command
pub fn execute(args: DescribeArgs) -> CommandResult {
    for_type!(args.type_arg, run())
}

fn run<T: Patchable>() -> CommandResult {
    println!("{}", T::type_name());
    for property in describe::<T>() {
        let marker = if property.is_sensitive() { " (sensitive)" } else { "" };
        println!(
            "  {:<22} {:<22} {}{}",
            property.path_segment(),
            property.name(),
            property.kind(),
            marker
        );
    }
    Ok(())
}
