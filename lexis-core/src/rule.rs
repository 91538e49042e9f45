//! Declarative rules and the rule set that owns them plus the error-handler registry.

use std::collections::HashMap;

use regex::Regex;

use crate::kind::Kind;

/// Symbolic name keying an [`ErrorHandler`] in a [`RuleSet`]'s registry.
pub type HandlerId = &'static str;

/// A named diagnostic template. Matching a rule that references a handler id emits this message
/// (and optional help) instead of producing a token.
#[derive(Debug, Clone)]
pub struct ErrorHandler {
    pub message: String,
    pub help: Option<String>,
}

impl ErrorHandler {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            help: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

pub const UNTERMINATED_STRING: HandlerId = "unterminated_string";
pub const UNTERMINATED_COMMENT: HandlerId = "unterminated_comment";
pub const INVALID_ESCAPE: HandlerId = "invalid_escape";
pub const INVALID_NUMBER: HandlerId = "invalid_number";
pub const INVALID_CHARACTER: HandlerId = "invalid_character";

/// A single declarative token rule.
#[derive(Debug, Clone)]
pub struct Rule<K: Kind> {
    pub kind: K,
    pub pattern: Regex,
    /// When true, a match is consumed but produces no token (whitespace, comments, ...).
    pub skip: bool,
    /// Higher priority wins ties with equal-length matches.
    pub priority: i32,
    /// When set, a match emits this handler's diagnostic instead of a token.
    pub error_handler: Option<HandlerId>,
    /// Assigned by `RuleSet::add_rule` in true insertion order; re-sorting by priority/pattern
    /// length doesn't touch this, so it's what "most recently added" actually means once the
    /// rule list has been sorted for scanning.
    pub(crate) seq: u64,
}

impl<K: Kind> Rule<K> {
    pub fn new(kind: K, pattern: Regex) -> Self {
        Self {
            kind,
            pattern,
            skip: false,
            priority: 0,
            error_handler: None,
            seq: 0,
        }
    }
}

/// An ordered collection of rules plus the error-handler registry and name table that give them
/// meaning outside of the scanner's hot loop.
#[derive(Debug, Clone)]
pub struct RuleSet<K: Kind> {
    rules: Vec<Rule<K>>,
    handlers: HashMap<HandlerId, ErrorHandler>,
    pub eof_kind: K,
    kind_names: HashMap<K, String>,
    next_seq: u64,
}

impl<K: Kind> RuleSet<K> {
    pub fn new(eof_kind: K) -> Self {
        let mut set = Self {
            rules: Vec::new(),
            handlers: HashMap::new(),
            eof_kind,
            kind_names: HashMap::new(),
            next_seq: 0,
        };
        set.register_default_handlers();
        set
    }

    /// Replaces the kind emitted for the end-of-file sentinel token.
    ///
    /// Used by the dynamic DSL, which can't know the final EOF id until `build()` resolves
    /// whether the caller declared their own `"EOF"` token.
    pub fn set_eof_kind(&mut self, eof_kind: K) {
        self.eof_kind = eof_kind;
    }

    fn register_default_handlers(&mut self) {
        self.register_error_handler(
            UNTERMINATED_STRING,
            ErrorHandler::new("unterminated string literal")
                .with_help("strings must be closed with a matching quote"),
        );
        self.register_error_handler(
            UNTERMINATED_COMMENT,
            ErrorHandler::new("unterminated block comment")
                .with_help("block comments must be closed with */"),
        );
        self.register_error_handler(
            INVALID_ESCAPE,
            ErrorHandler::new("invalid escape sequence")
                .with_help(r#"valid escape sequences are: \n \r \t \\ \""#),
        );
        self.register_error_handler(
            INVALID_NUMBER,
            ErrorHandler::new("invalid number literal")
                .with_help("numbers must be in a valid format (e.g., 123, 0x7F, 3.14)"),
        );
        self.register_error_handler(
            INVALID_CHARACTER,
            ErrorHandler::new("invalid character")
                .with_help("this character is not allowed in this context"),
        );
    }

    /// Appends `rule` and re-sorts by `(-priority, +pattern source length)`.
    pub fn add_rule(&mut self, mut rule: Rule<K>) {
        rule.seq = self.next_seq;
        self.next_seq += 1;
        self.rules.push(rule);
        self.resort();
    }

    fn resort(&mut self) {
        self.rules.sort_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then_with(|| a.pattern.as_str().len().cmp(&b.pattern.as_str().len()))
        });
    }

    pub fn rules(&self) -> &[Rule<K>] {
        &self.rules
    }

    /// Finds the most recently added rule of `kind`, for the DSL's `.error(name, handler)` step,
    /// which attaches a handler to a rule that was already registered under `.token(name, ...)`.
    ///
    /// "Most recently added" means insertion order, tracked by each rule's `seq`, not position in
    /// `self.rules` — that list is kept sorted by `(-priority, +pattern length)` for scanning, so
    /// two same-kind rules can (and in the DSL's error-variant convention, typically do) end up in
    /// the opposite order from how they were registered.
    pub fn rule_mut_by_kind(&mut self, kind: K) -> Option<&mut Rule<K>> {
        self.rules
            .iter_mut()
            .filter(|rule| rule.kind == kind)
            .max_by_key(|rule| rule.seq)
    }

    pub fn register_error_handler(&mut self, id: HandlerId, handler: ErrorHandler) {
        self.handlers.insert(id, handler);
    }

    pub fn register_error_handler_with(
        &mut self,
        id: HandlerId,
        message: impl Into<String>,
        help: Option<String>,
    ) {
        let mut handler = ErrorHandler::new(message);
        handler.help = help;
        self.register_error_handler(id, handler);
    }

    pub fn handler(&self, id: HandlerId) -> Option<&ErrorHandler> {
        self.handlers.get(id)
    }

    pub fn set_kind_name(&mut self, kind: K, name: impl Into<String>) {
        self.kind_names.insert(kind, name.into());
    }

    pub fn kind_name(&self, kind: K) -> &str {
        self.kind_names
            .get(&kind)
            .map(String::as_str)
            .unwrap_or("<unnamed>")
    }
}
