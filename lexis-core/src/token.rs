//! The token record produced by the scanner.

use lexis_foundation::{source::SourceMap, span::Span};

use crate::kind::Kind;

/// A single lexeme: a kind and the span of source bytes it came from.
///
/// `value` is a backup copy of the lexeme text, used only when the source that produced the span
/// is no longer available (e.g. a token is being displayed outside of any [`SourceMap`]).
#[derive(Debug, Clone)]
pub struct Token<K: Kind> {
    pub kind: K,
    pub span: Span,
    pub value: Option<String>,
}

impl<K: Kind> Token<K> {
    pub fn new(kind: K, span: Span) -> Self {
        Self {
            kind,
            span,
            value: None,
        }
    }

    pub fn with_value(kind: K, span: Span, value: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            value: Some(value.into()),
        }
    }

    /// Returns the source text this token covers, falling back to the cached `value` and finally
    /// to a placeholder if neither is available.
    pub fn lexeme<'a>(&'a self, sources: &'a impl SourceMap) -> &'a str {
        sources
            .get(self.span.source_id)
            .map(|file| &file.contents[self.span.to_range()])
            .or(self.value.as_deref())
            .unwrap_or("<unknown>")
    }
}

/// Equality compares `kind` and `span` only; `value` is a display-time convenience and does not
/// participate in token identity.
impl<K: Kind> PartialEq for Token<K> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.span == other.span
    }
}

impl<K: Kind> Eq for Token<K> {}
