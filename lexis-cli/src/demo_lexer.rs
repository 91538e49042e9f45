//! A worked example rule set: identifiers, numbers, strings, comments, a handful of keywords,
//! and common operators/punctuation, built through the typed DSL.

use lexis_core::{
    dsl::typed::{Lexer, LexerBuilder},
    kind::TypedTokenKind,
    rule::{INVALID_NUMBER, UNTERMINATED_COMMENT, UNTERMINATED_STRING},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoKind {
    Ident,
    IntLit,
    FloatLit,
    StringLit,
    Comment,
    If,
    Else,
    While,
    Return,
    Let,
    Plus,
    Minus,
    Star,
    Slash,
    Assign,
    Equal,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Semi,
    Whitespace,
    Eof,
}

const NAMES: &[(&str, DemoKind)] = &[
    ("IDENT", DemoKind::Ident),
    ("INT", DemoKind::IntLit),
    ("FLOAT", DemoKind::FloatLit),
    ("STRING", DemoKind::StringLit),
    ("COMMENT", DemoKind::Comment),
    ("IF", DemoKind::If),
    ("ELSE", DemoKind::Else),
    ("WHILE", DemoKind::While),
    ("RETURN", DemoKind::Return),
    ("LET", DemoKind::Let),
    ("PLUS", DemoKind::Plus),
    ("MINUS", DemoKind::Minus),
    ("STAR", DemoKind::Star),
    ("SLASH", DemoKind::Slash),
    ("ASSIGN", DemoKind::Assign),
    ("EQUAL", DemoKind::Equal),
    ("LPAREN", DemoKind::LParen),
    ("RPAREN", DemoKind::RParen),
    ("LBRACE", DemoKind::LBrace),
    ("RBRACE", DemoKind::RBrace),
    ("SEMI", DemoKind::Semi),
    ("WS", DemoKind::Whitespace),
    ("EOF", DemoKind::Eof),
];

impl TypedTokenKind for DemoKind {
    const EOF: Self = DemoKind::Eof;

    fn parse(name: &str) -> Option<Self> {
        NAMES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, kind)| *kind)
    }

    fn all_names() -> &'static [&'static str] {
        const N: &[&str] = &[
            "IDENT", "INT", "FLOAT", "STRING", "COMMENT", "IF", "ELSE", "WHILE", "RETURN", "LET",
            "PLUS", "MINUS", "STAR", "SLASH", "ASSIGN", "EQUAL", "LPAREN", "RPAREN", "LBRACE",
            "RBRACE", "SEMI", "WS", "EOF",
        ];
        N
    }

    fn name(&self) -> &'static str {
        NAMES
            .iter()
            .find(|(_, kind)| kind == self)
            .map(|(name, _)| *name)
            .unwrap_or("UNKNOWN")
    }
}

/// Builds the demo lexer. Keywords are registered at a higher priority than the generic
/// identifier rule so that e.g. `"if"` lexes as `If`, not `Ident`, despite matching both patterns
/// at equal length.
pub fn build() -> Lexer<DemoKind> {
    LexerBuilder::<DemoKind>::new()
        .token_with(
            "COMMENT",
            r"//[^\n]*(\n)?",
            true,
            0,
        )
        .unwrap()
        .token_with("COMMENT", r"/\*([^*]|\*[^/])*\*/", true, 0)
        .unwrap()
        .token_with(
            "COMMENT",
            r"/\*([^*]|\*[^/])*\*?$",
            true,
            -1,
        )
        .unwrap()
        .error("COMMENT", UNTERMINATED_COMMENT)
        .unwrap()
        .token_with("IF", "if", false, 10)
        .unwrap()
        .token_with("ELSE", "else", false, 10)
        .unwrap()
        .token_with("WHILE", "while", false, 10)
        .unwrap()
        .token_with("RETURN", "return", false, 10)
        .unwrap()
        .token_with("LET", "let", false, 10)
        .unwrap()
        .token("IDENT", "[a-zA-Z_][a-zA-Z0-9_]*")
        .unwrap()
        .token("FLOAT", r"[0-9]+\.[0-9]+")
        .unwrap()
        .token("INT", "[0-9]+")
        .unwrap()
        .token("STRING", "\"(\\\\.|[^\"\\\\])*\"")
        .unwrap()
        .token_with("STRING", "\"(\\\\.|[^\"\\\\])*$", false, -1)
        .unwrap()
        .error("STRING", UNTERMINATED_STRING)
        .unwrap()
        .token_with(
            "INT",
            "[0-9]+[a-zA-Z_]+",
            false,
            -1,
        )
        .unwrap()
        .error("INT", INVALID_NUMBER)
        .unwrap()
        .token_with("EQUAL", "==", false, 5)
        .unwrap()
        .token("ASSIGN", "=")
        .unwrap()
        .token("PLUS", r"\+")
        .unwrap()
        .token("MINUS", "-")
        .unwrap()
        .token("STAR", r"\*")
        .unwrap()
        .token("SLASH", "/")
        .unwrap()
        .token("LPAREN", r"\(")
        .unwrap()
        .token("RPAREN", r"\)")
        .unwrap()
        .token("LBRACE", r"\{")
        .unwrap()
        .token("RBRACE", r"\}")
        .unwrap()
        .token("SEMI", ";")
        .unwrap()
        .token_with("WS", r"[ \t\r\n]+", true, 0)
        .unwrap()
        .build()
}
