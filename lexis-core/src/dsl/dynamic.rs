//! The dynamic DSL flavor: token kinds are interned from symbolic names in first-seen order,
//! for callers who don't want to declare an enum up front.

use std::collections::HashMap;

use regex::Regex;

use lexis_foundation::span::SourceId;

use crate::{
    dsl::LexerBuildError,
    rule::{HandlerId, Rule, RuleSet},
    scanner::{ScanOutcome, Scanner},
};

/// A token kind minted at build time by [`DynamicLexerBuilder`]. Equality/ordering is by id only;
/// use [`DynamicLexer::kind_name`] to get the symbolic name back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DynamicTokenKind(u32);

/// An immutable, finished lexer whose kinds were interned by name.
pub struct DynamicLexer {
    rule_set: RuleSet<DynamicTokenKind>,
}

impl DynamicLexer {
    pub fn rule_set(&self) -> &RuleSet<DynamicTokenKind> {
        &self.rule_set
    }

    pub fn kind_name(&self, kind: DynamicTokenKind) -> &str {
        self.rule_set.kind_name(kind)
    }

    pub fn scan(&self, source_id: SourceId, text: &str) -> ScanOutcome<DynamicTokenKind> {
        Scanner::new(&self.rule_set, source_id, text).scan_all()
    }
}

pub struct DynamicLexerBuilder {
    rule_set: RuleSet<DynamicTokenKind>,
    ids_by_name: HashMap<String, DynamicTokenKind>,
    next_id: u32,
}

impl DynamicLexerBuilder {
    pub fn new() -> Self {
        // `eof_kind` is a throwaway placeholder: ids are handed out strictly in first-seen order
        // as the caller's `.token`/`.error` calls come in, so which id (if any) "EOF" ends up
        // with can't be known until `build()`, once every caller-declared name has been interned.
        let placeholder = DynamicTokenKind(u32::MAX);
        Self {
            rule_set: RuleSet::new(placeholder),
            ids_by_name: HashMap::new(),
            next_id: 0,
        }
    }

    fn intern(&mut self, name: &str) -> DynamicTokenKind {
        if let Some(&id) = self.ids_by_name.get(name) {
            return id;
        }
        let id = DynamicTokenKind(self.next_id);
        self.next_id += 1;
        self.ids_by_name.insert(name.to_string(), id);
        self.rule_set.set_kind_name(id, name);
        id
    }

    fn compile(name: &str, pattern: &str) -> Result<Regex, LexerBuildError> {
        Regex::new(pattern).map_err(|source| LexerBuildError::Pattern {
            name: name.to_string(),
            source,
        })
    }

    pub fn token(mut self, name: &str, pattern: &str) -> Result<Self, LexerBuildError> {
        self.add_token(name, pattern, false, 0)?;
        Ok(self)
    }

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
        let regex = Self::compile(name, pattern)?;
        let kind = self.intern(name);
        self.rule_set.add_rule(Rule {
            skip,
            priority,
            ..Rule::new(kind, regex)
        });
        Ok(())
    }

    pub fn error(mut self, name: &str, handler: HandlerId) -> Result<Self, LexerBuildError> {
        let kind = self.intern(name);
        if let Some(rule) = self.rule_set.rule_mut_by_kind(kind) {
            rule.error_handler = Some(handler);
        }
        Ok(self)
    }

    /// Resolves the id used for the end-of-file sentinel token: whatever `"EOF"` was interned to
    /// if the caller declared it, otherwise synthesized here, now, as the next id in sequence —
    /// so it only lands on id `0` when `"EOF"` is genuinely the first name seen.
    pub fn build(mut self) -> DynamicLexer {
        let eof = self.intern("EOF");
        self.rule_set.set_eof_kind(eof);
        DynamicLexer {
            rule_set: self.rule_set,
        }
    }
}

impl Default for DynamicLexerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
