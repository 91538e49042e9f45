//! A cursor over a scanned token vector with peek, advance, and LIFO pushback.

use std::fmt;

use crate::{kind::Kind, token::Token};

/// Errors raised by [`TokenStream`] when an operation can't be satisfied by what's left in the
/// stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenStreamError<K: Kind> {
    UnexpectedKind { expected: K, found: Option<K> },
    EndOfStream,
}

impl<K: Kind> fmt::Display for TokenStreamError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedKind { expected, found } => {
                let found = match found {
                    Some(kind) => format!("{kind:?}"),
                    None => "EOF".to_string(),
                };
                write!(f, "Expected {expected:?} but found {found}")
            }
            Self::EndOfStream => write!(f, "Unexpected end of token stream"),
        }
    }
}

impl<K: Kind> std::error::Error for TokenStreamError<K> {}

/// A cursor over an already-scanned token vector.
///
/// `advance` drains `pushed_back` before moving `position` forward, so a token returned to the
/// stream via [`TokenStream::push`] is seen again before any new token is consumed.
#[derive(Debug, Clone)]
pub struct TokenStream<K: Kind> {
    tokens: Vec<Token<K>>,
    position: usize,
    pushed_back: Vec<Token<K>>,
}

impl<K: Kind> TokenStream<K> {
    pub fn new(tokens: Vec<Token<K>>) -> Self {
        Self {
            tokens,
            position: 0,
            pushed_back: Vec::new(),
        }
    }

    /// The index into the underlying token vector; pushed-back tokens do not affect this.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn eof(&self) -> bool {
        self.pushed_back.is_empty() && self.position >= self.tokens.len()
    }

    fn current(&self) -> Option<&Token<K>> {
        self.pushed_back
            .last()
            .or_else(|| self.tokens.get(self.position))
    }

    pub fn peek(&self) -> Result<&Token<K>, TokenStreamError<K>> {
        self.current().ok_or(TokenStreamError::EndOfStream)
    }

    /// Looks `n` tokens ahead, counting a just-pushed-back token as offset 0.
    pub fn peek_n(&self, n: usize) -> Option<&Token<K>> {
        if n < self.pushed_back.len() {
            let index = self.pushed_back.len() - 1 - n;
            return self.pushed_back.get(index);
        }
        self.tokens.get(self.position + (n - self.pushed_back.len()))
    }

    pub fn advance(&mut self) -> Result<Token<K>, TokenStreamError<K>> {
        if let Some(token) = self.pushed_back.pop() {
            return Ok(token);
        }
        let token = self
            .tokens
            .get(self.position)
            .cloned()
            .ok_or(TokenStreamError::EndOfStream)?;
        self.position += 1;
        Ok(token)
    }

    /// Returns a token to the head of the stream; the next `advance` (or `peek`) sees it first.
    pub fn push(&mut self, token: Token<K>) {
        self.pushed_back.push(token);
    }

    pub fn expect(&mut self, kind: K) -> Result<Token<K>, TokenStreamError<K>> {
        let found = self.current().map(|token| token.kind);
        if found == Some(kind) {
            self.advance()
        } else {
            Err(TokenStreamError::UnexpectedKind {
                expected: kind,
                found,
            })
        }
    }

    /// Consumes and returns the current token if it matches `kind`, otherwise leaves the stream
    /// untouched and returns `None`.
    pub fn try_match(&mut self, kind: K) -> Option<Token<K>> {
        if self.current().map(|token| token.kind) == Some(kind) {
            self.advance().ok()
        } else {
            None
        }
    }

    /// Repeatedly advances while `predicate` holds for the current token and the stream isn't
    /// exhausted, returning everything consumed.
    pub fn consume_while(&mut self, predicate: impl Fn(K) -> bool) -> Vec<Token<K>> {
        let mut consumed = Vec::new();
        while !self.eof() {
            let Some(current) = self.current() else { break };
            if !predicate(current.kind) {
                break;
            }
            consumed.push(self.advance().expect("checked via current() above"));
        }
        consumed
    }
}

#[cfg(test)]
mod tests {
    use lexis_foundation::span::{SourceId, Span};

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum K {
        A,
        B,
        C,
        D,
        E,
        Eof,
    }

    fn tok(kind: K, start: u32) -> Token<K> {
        Token::new(kind, Span::new(SourceId::new(0), start, start + 1))
    }

    fn stream() -> TokenStream<K> {
        TokenStream::new(vec![
            tok(K::A, 0),
            tok(K::B, 1),
            tok(K::C, 2),
            tok(K::D, 3),
            tok(K::E, 4),
            tok(K::Eof, 5),
        ])
    }

    #[test]
    fn pushback_round_trips() {
        let mut s = stream();
        let a = s.advance().unwrap();
        let b = s.advance().unwrap();
        s.push(b.clone());
        s.push(a.clone());
        assert_eq!(s.peek_n(0).unwrap().kind, K::A);
        assert_eq!(s.peek_n(1).unwrap().kind, K::B);
        assert_eq!(s.peek_n(2).unwrap().kind, K::C);
        assert_eq!(s.advance().unwrap().kind, K::A);
        assert_eq!(s.advance().unwrap().kind, K::B);
        assert_eq!(s.position(), 2);
    }

    #[test]
    fn expect_wrong_kind_reports_actual() {
        let mut s = stream();
        let err = s.expect(K::B).unwrap_err();
        assert_eq!(
            err,
            TokenStreamError::UnexpectedKind {
                expected: K::B,
                found: Some(K::A)
            }
        );
    }

    #[test]
    fn expect_past_eof_reports_eof() {
        let mut s = TokenStream::new(vec![tok(K::Eof, 0)]);
        s.advance().unwrap();
        let err = s.expect(K::A).unwrap_err();
        assert_eq!(format!("{err}"), "Expected A but found EOF");
    }

    #[test]
    fn try_match_leaves_stream_untouched_on_mismatch() {
        let mut s = stream();
        assert!(s.try_match(K::B).is_none());
        assert_eq!(s.position(), 0);
        assert!(s.try_match(K::A).is_some());
        assert_eq!(s.position(), 1);
    }

    #[test]
    fn consume_while_collects_matching_prefix() {
        let mut s = stream();
        let consumed = s.consume_while(|k| matches!(k, K::A | K::B | K::C));
        assert_eq!(consumed.len(), 3);
        assert_eq!(s.peek().unwrap().kind, K::D);
    }
}
