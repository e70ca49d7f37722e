use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Working directory for glob matching and output paths
    #[arg(long, global = true, default_value = "")]
    pub cwd: PathBuf,

    /// Compute all outputs but print them as a plan instead of writing
    #[arg(long, global = true)]
    pub dry_run: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate standalone modules (aka "bundles") from .ohm files
    GenerateBundles {
        /// Glob patterns selecting the grammar source files
        #[arg(required = true)]
        patterns: Vec<String>,

        /// Generate a corresponding .d.ts file for TypeScript
        #[arg(short = 't', long)]
        with_types: bool,

        /// Generate bundle in ES module format [default is CommonJS]
        #[arg(short, long)]
        esm: bool,
    },
}
