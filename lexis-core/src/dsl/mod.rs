//! Declarative builders that assemble a [`crate::RuleSet`] from token names and patterns.

pub mod dynamic;
pub mod typed;

use thiserror::Error;

/// Raised while assembling a lexer through either DSL flavor.
#[derive(Debug, Error)]
pub enum LexerBuildError {
    #[error("Unknown token kind: {name}. Available kinds: {}", available.join(", "))]
    UnknownKind { name: String, available: Vec<String> },
    #[error("invalid pattern for token {name:?}: {source}")]
    Pattern {
        name: String,
        #[source]
        source: regex::Error,
    },
}
