pub mod bundler;
pub mod cli;
pub mod grammar;
pub mod writer;

use clap::Parser;

use crate::bundler::BundleOptions;
use crate::grammar::{GrammarCompiler, TypeGenerator};

/// Parse the command line and run it against the given external compiler
/// and declaration generator. The hosting binary supplies both and turns
/// the returned error into its exit status.
pub fn run<C, T>(compiler: &C, type_gen: &T) -> anyhow::Result<()>
where
    C: GrammarCompiler,
    T: TypeGenerator<C::Grammar>,
{
    let args = cli::Cli::parse();

    match args.command {
        cli::Command::GenerateBundles {
            patterns,
            with_types,
            esm,
        } => {
            let opts = BundleOptions {
                dry_run: args.dry_run,
                cwd: args.cwd,
                with_types,
                esm,
            };
            let plan = bundler::generate_bundles(compiler, type_gen, &patterns, &opts)?;

            if opts.dry_run {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            }
        }
    }

    Ok(())
}
