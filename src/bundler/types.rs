//! Emit the TypeScript declaration file paired with a bundle.

use std::path::Path;

use anyhow::Result;

use crate::bundler::{GRAMMAR_FILE_EXT, assert_file_extension};
use crate::grammar::{Grammar, GrammarCollection, TypeGenerator};
use crate::writer::Writer;

/// Two-line header marking a file as generated, naming the source file
/// when one is given.
pub fn banner(filename: Option<&str>) -> String {
    match filename {
        Some(filename) => format!(
            "// AUTOGENERATED FILE\n\
             // This file was generated from {filename} by `ohm generateBundles`."
        ),
        None => "// AUTOGENERATED FILE\n\
                 // This file was generated by `ohm generateBundles`."
            .to_string(),
    }
}

/// Write `<grammar_path>-bundle.d.ts` for one source file. The declaration
/// body itself comes from the external generator.
pub fn emit<G, T>(
    grammar_path: &str,
    grammars: &GrammarCollection<G>,
    type_gen: &T,
    writer: &mut dyn Writer,
) -> Result<()>
where
    G: Grammar,
    T: TypeGenerator<G>,
{
    assert_file_extension(grammar_path, GRAMMAR_FILE_EXT)?;

    let filename = Path::new(grammar_path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| grammar_path.to_string());

    let contents = format!(
        "{}\n\n{}\n",
        banner(Some(&filename)),
        type_gen.type_declarations(grammars)
    );
    writer.write(&format!("{grammar_path}-bundle.d.ts"), &contents)
}
