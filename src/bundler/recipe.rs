//! Emit a standalone JavaScript module that rebuilds the compiled
//! grammar(s) at load time through the runtime's recipe mechanism.

use anyhow::Result;

use crate::bundler::{GRAMMAR_FILE_EXT, assert_file_extension};
use crate::grammar::{Grammar, GrammarCollection, SuperGrammar};
use crate::writer::Writer;

/// Write `<grammar_path>-bundle.js` for one source file.
///
/// A single-grammar file exports the grammar itself; otherwise the export
/// is a (possibly empty) object holding one recipe per grammar name.
/// Grammars arrive super-first, so `result.<super>` is always bound before
/// a sub-grammar's recipe references it.
pub fn emit<G: Grammar>(
    grammar_path: &str,
    grammars: &GrammarCollection<G>,
    writer: &mut dyn Writer,
    esm: bool,
) -> Result<()> {
    assert_file_extension(grammar_path, GRAMMAR_FILE_EXT)?;

    let output_filename = format!("{grammar_path}-bundle.js");
    let is_single_grammar = grammars.len() == 1;

    let mut output = String::from(if esm {
        "import ohm from 'ohm-js';"
    } else {
        "'use strict';const ohm=require('ohm-js');"
    });

    if !is_single_grammar {
        output.push_str("const result={};");
    }
    for (name, grammar) in grammars {
        let super_grammar_expr = match grammar.super_grammar() {
            SuperGrammar::BuiltIn => None,
            SuperGrammar::Named(super_name) => Some(format!("result.{super_name}")),
        };
        if is_single_grammar {
            output.push_str("const result=");
        } else {
            output.push_str(&format!("result.{name}="));
        }
        output.push_str(&format!(
            "ohm.makeRecipe({});",
            grammar.to_recipe(super_grammar_expr.as_deref())
        ));
    }
    output.push_str(if esm {
        "export default result;"
    } else {
        "module.exports=result;"
    });

    writer.write(&output_filename, &output)
}
