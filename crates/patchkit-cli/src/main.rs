//! patchkit CLI
//!
//! Command-line interface for diffing, parsing and applying patches over
//! JSON documents of the sample domain types.

use clap::{Parser, Subcommand, ValueEnum};
use patchkit_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "patchkit")]
#[command(about = "patchkit - structural diff and patch for domain objects", long_about = None)]
struct Cli {
    /// Log output format (logs go to stderr)
    #[arg(long, value_enum, global = true, default_value_t = LogFormat::Human)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Human,
    Json,
}

impl From<LogFormat> for Profile {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Human => Profile::Development,
            LogFormat::Json => Profile::Production,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compute the patch turning SOURCE into TARGET
    Diff(commands::diff::DiffArgs),
    /// Apply a patch to an object
    Apply(commands::apply::ApplyArgs),
    /// Derive a patch from a structured input document
    Parse(commands::parse::ParseArgs),
    /// List the patchable properties of a type
    Describe(commands::describe::DescribeArgs),
}

fn main() {
    let cli = Cli::parse();
    init(cli.log_format.into());

    let result = match cli.command {
        Commands::Diff(args) => commands::diff::execute(args),
        Commands::Apply(args) => commands::apply::execute(args),
        Commands::Parse(args) => commands::parse::execute(args),
        Commands::Describe(args) => commands::describe::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
