//! The bundling pipeline: discover grammar files, compile them through the
//! external compiler, and drive the emitters against the chosen sink.

pub mod recipe;
pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::grammar::{GrammarCompiler, TypeGenerator};
use crate::writer::{DiskWriter, Plan, Writer};

/// The one file extension this tool recognizes as grammar source.
pub const GRAMMAR_FILE_EXT: &str = ".ohm";

pub struct BundleOptions {
    /// Collect outputs into the returned `Plan` instead of writing to disk.
    pub dry_run: bool,
    /// Base directory for glob matching and output paths; empty means the
    /// current working directory.
    pub cwd: PathBuf,
    /// Also emit a `.d.ts` declaration file per grammar source file.
    pub with_types: bool,
    /// Emit ES-module syntax instead of CommonJS.
    pub esm: bool,
}

/// Extension of `path` including the leading dot, or `""` when there is
/// none. Mirrors how the generated filenames are matched: `grammar.` gives
/// `"."`, a bare dotfile like `.ohm` gives `""`.
pub fn file_extension(path: &str) -> String {
    match Path::new(path).extension() {
        Some(ext) => format!(".{}", ext.to_string_lossy()),
        None => String::new(),
    }
}

/// Fail loudly when a path slated for emission lacks the expected
/// extension. The glob pre-filter skips such files silently instead; this
/// guard protects the emitters when they are called directly.
pub fn assert_file_extension(filename: &str, ext: &str) -> Result<()> {
    let actual = file_extension(filename);
    if actual != ext {
        return Err(anyhow!(
            "Wrong file extension: expected '{}', got '{}'",
            ext,
            actual
        ));
    }
    Ok(())
}

/// Expand `patterns` under `opts.cwd` and bundle every grammar file found.
///
/// Each matched `.ohm` file is read, compiled, and emitted as
/// `<path>-bundle.js` (plus `<path>-bundle.d.ts` when `with_types` is
/// set). Any failure — unreadable file, compiler rejection, unwritable
/// output — aborts the whole run; earlier outputs are left in place.
///
/// The returned plan holds the generated contents when `dry_run` is set
/// and is empty otherwise.
pub fn generate_bundles<C, T>(
    compiler: &C,
    type_gen: &T,
    patterns: &[String],
    opts: &BundleOptions,
) -> Result<Plan>
where
    C: GrammarCompiler,
    T: TypeGenerator<C::Grammar>,
{
    let mut plan = Plan::new();
    let mut disk = DiskWriter::new(opts.cwd.clone());
    let writer: &mut dyn Writer = if opts.dry_run { &mut plan } else { &mut disk };

    for pattern in patterns {
        let full_pattern = if opts.cwd.as_os_str().is_empty() {
            pattern.clone()
        } else {
            opts.cwd.join(pattern).to_string_lossy().into_owned()
        };

        for entry in glob::glob(&full_pattern)
            .with_context(|| format!("Invalid glob pattern `{pattern}`"))?
        {
            let source_path = entry?;
            if !source_path.is_file() {
                continue;
            }

            // Output filenames stay relative to the working directory.
            let source_filename = match source_path.strip_prefix(&opts.cwd) {
                Ok(rel) => rel.to_string_lossy().into_owned(),
                Err(_) => source_path.to_string_lossy().into_owned(),
            };

            // Don't process any files that don't have the right extension.
            if file_extension(&source_filename) != GRAMMAR_FILE_EXT {
                continue;
            }

            let grammar_source = fs::read_to_string(&source_path)
                .with_context(|| format!("Reading {}", source_path.display()))?;
            let grammars = compiler
                .grammars(&grammar_source)
                .with_context(|| format!("Compiling {source_filename}"))?;

            recipe::emit(&source_filename, &grammars, writer, opts.esm)?;
            if opts.with_types {
                types::emit(&source_filename, &grammars, type_gen, writer)?;
            }
        }
    }

    Ok(plan)
}
