//! Terminal rendering glue: diagnostics through `codespan-reporting`, tokens as a plain dump.

use lexis_core::kind::TypedTokenKind;
use lexis_core::token::Token;
use lexis_foundation::{errors::Diagnostic, source::InMemorySourceMap};

pub fn emit_diagnostics(diagnostics: &[Diagnostic], sources: &InMemorySourceMap) {
    for diagnostic in diagnostics {
        if let Err(error) = diagnostic.emit_to_stderr(sources) {
            tracing::error!(%error, "failed to render diagnostic");
        }
    }
}

pub fn dump_tokens<K: TypedTokenKind>(tokens: &[Token<K>], sources: &InMemorySourceMap) {
    for token in tokens {
        let lexeme = token.lexeme(sources);
        println!(
            "{:>12} @ {:>4}..{:<4} {:?}",
            token.kind.name(),
            token.span.start,
            token.span.end,
            lexeme
        );
    }
}
