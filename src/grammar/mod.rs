//! Boundary with the external grammar compiler.
//!
//! The heavy lifting — parsing grammar syntax, semantic analysis, recipe
//! serialization — lives behind these traits. This crate only orchestrates.

use anyhow::Result;
use indexmap::IndexMap;

/// All grammars compiled from one source file, keyed by grammar name.
///
/// Iteration order is declaration order. The compiler guarantees that a
/// super-grammar appears before any grammar extending it, which is what
/// lets the recipe emitter reference `result.<super>` without a forward
/// declaration.
pub type GrammarCollection<G> = IndexMap<String, G>;

/// What a grammar extends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuperGrammar {
    /// The built-in base grammar; needs no explicit reference in generated
    /// code.
    BuiltIn,
    /// Another grammar from the same collection, by name.
    Named(String),
}

/// A compiled grammar, opaque except for the two facets bundling needs.
pub trait Grammar {
    fn super_grammar(&self) -> SuperGrammar;

    /// Serialize into a replayable recipe expression.
    ///
    /// `super_grammar_expr` is a textual reference to the super-grammar's
    /// recipe (e.g. `result.Base`), or `None` when the super is built-in.
    fn to_recipe(&self, super_grammar_expr: Option<&str>) -> String;
}

/// The external compiler: grammar source text in, compiled grammars out.
pub trait GrammarCompiler {
    type Grammar: Grammar;

    fn grammars(&self, source: &str) -> Result<GrammarCollection<Self::Grammar>>;
}

/// The external `.d.ts` generator: compiled grammars in, declaration body
/// text out.
pub trait TypeGenerator<G: Grammar> {
    fn type_declarations(&self, grammars: &GrammarCollection<G>) -> String;
}
