//! The typed DSL flavor: token kinds come from a caller-provided enum implementing
//! [`TypedTokenKind`].

use regex::Regex;

use crate::{
    dsl::LexerBuildError,
    kind::TypedTokenKind,
    rule::{HandlerId, Rule, RuleSet},
    scanner::{ScanOutcome, Scanner},
};
use lexis_foundation::span::SourceId;

/// An immutable, finished lexer built from a [`LexerBuilder`].
pub struct Lexer<K: TypedTokenKind> {
    rule_set: RuleSet<K>,
}

impl<K: TypedTokenKind> Lexer<K> {
    pub fn rule_set(&self) -> &RuleSet<K> {
        &self.rule_set
    }

    pub fn scan(&self, source_id: SourceId, text: &str) -> ScanOutcome<K> {
        Scanner::new(&self.rule_set, source_id, text).scan_all()
    }
}

/// Builds a [`Lexer<K>`] by registering named rules; names are resolved against
/// `K::parse`/`K::all_names`.
pub struct LexerBuilder<K: TypedTokenKind> {
    rule_set: RuleSet<K>,
}

impl<K: TypedTokenKind> LexerBuilder<K> {
    pub fn new() -> Self {
        let mut rule_set = RuleSet::new(K::EOF);
        rule_set.set_kind_name(K::EOF, "EOF");
        Self { rule_set }
    }

    fn resolve(&self, name: &str) -> Result<K, LexerBuildError> {
        K::parse(name).ok_or_else(|| LexerBuildError::UnknownKind {
            name: name.to_string(),
            available: K::all_names().iter().map(|s| s.to_string()).collect(),
        })
    }

    fn compile(name: &str, pattern: &str) -> Result<Regex, LexerBuildError> {
        Regex::new(pattern).map_err(|source| LexerBuildError::Pattern {
            name: name.to_string(),
            source,
        })
    }

    /// Registers a plain token rule with default priority 0, not skipped.
    pub fn token(mut self, name: &str, pattern: &str) -> Result<Self, LexerBuildError> {
        self.add_token(name, pattern, false, 0)?;
        Ok(self)
    }

    /// Registers a token rule with explicit `skip`/`priority`.
    pub fn token_with(
        mut self,
        name: &str,
        pattern: &str,
        skip: bool,
        priority: i32,
    ) -> Result<Self, LexerBuildError> {
        self.add_token(name, pattern, skip, priority)?;
        Ok(self)
    }

    fn add_token(
        &mut self,
        name: &str,
        pattern: &str,
        skip: bool,
        priority: i32,
    ) -> Result<(), LexerBuildError> {
        let kind = self.resolve(name)?;
        let regex = Self::compile(name, pattern)?;
        self.rule_set.set_kind_name(kind, name);
        self.rule_set.add_rule(Rule {
            skip,
            priority,
            ..Rule::new(kind, regex)
        });
        Ok(())
    }

    /// Attaches `handler` to the most recently registered rule named `name`: that rule stops
    /// emitting tokens and starts emitting the handler's diagnostic on match.
    pub fn error(mut self, name: &str, handler: HandlerId) -> Result<Self, LexerBuildError> {
        let kind = self.resolve(name)?;
        if let Some(rule) = self.rule_set.rule_mut_by_kind(kind) {
            rule.error_handler = Some(handler);
        }
        Ok(self)
    }

    pub fn build(self) -> Lexer<K> {
        Lexer {
            rule_set: self.rule_set,
        }
    }
}

impl<K: TypedTokenKind> Default for LexerBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}
