//! The matching engine: longest-match-with-priority scanning, error-pattern rules, and
//! per-character recovery from unmatched input.

use lexis_foundation::{
    errors::{Diagnostic, Label},
    span::{SourceId, Span},
};

use crate::{kind::Kind, match_at::MatchAt, rule::RuleSet, token::Token};

/// The result of a full scan: the token stream plus any diagnostics raised along the way.
#[derive(Debug, Clone)]
pub struct ScanOutcome<K: Kind> {
    pub tokens: Vec<Token<K>>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<K: Kind> ScanOutcome<K> {
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == lexis_foundation::errors::Severity::Error)
    }
}

/// Drives a [`RuleSet`] over a single source text.
pub struct Scanner<'a, K: Kind> {
    rule_set: &'a RuleSet<K>,
    source_id: SourceId,
    text: &'a str,
}

impl<'a, K: Kind> Scanner<'a, K> {
    pub fn new(rule_set: &'a RuleSet<K>, source_id: SourceId, text: &'a str) -> Self {
        Self {
            rule_set,
            source_id,
            text,
        }
    }

    /// Scans the entire input, producing every token and diagnostic in source order, terminated
    /// by a zero-length end-of-file token.
    #[tracing::instrument(level = "debug", skip(self), fields(len = self.text.len()))]
    pub fn scan_all(&self) -> ScanOutcome<K> {
        // Heuristic capacity: most inputs average out to roughly one token per five bytes.
        let mut tokens = Vec::with_capacity((self.text.len() / 5).max(1000));
        let mut diagnostics = Vec::new();

        let mut pos = 0usize;
        while pos < self.text.len() {
            match self.best_match(pos) {
                Some(candidate) => {
                    let span = Span::new(self.source_id, pos as u32, (pos + candidate.len) as u32);
                    let rule = candidate.rule;
                    if let Some(handler_id) = rule.error_handler {
                        if let Some(handler) = self.rule_set.handler(handler_id) {
                            let mut diagnostic = Diagnostic::error(handler.message.clone())
                                .with_label(Label::primary(span, "here"));
                            if let Some(help) = &handler.help {
                                diagnostic = diagnostic.with_help(help.clone());
                            }
                            diagnostics.push(diagnostic);
                        }
                        // Unknown handler ids are tolerated: the match is consumed silently, as
                        // if it were a skip rule.
                    } else if !rule.skip {
                        tokens.push(Token::new(rule.kind, span));
                    }
                    pos += candidate.len;
                }
                None => {
                    let c = self.text[pos..].chars().next().expect("pos < text.len()");
                    let len = c.len_utf8();
                    let span = Span::new(self.source_id, pos as u32, (pos + len) as u32);
                    diagnostics.push(
                        Diagnostic::error("unexpected character")
                            .with_label(Label::primary(span, format!("unexpected '{c}'")))
                            .with_help("remove this character or add a lexer rule to handle it"),
                    );
                    pos += len;
                }
            }
        }

        let eof_span = Span::empty_at(self.source_id, self.text.len() as u32);
        tokens.push(Token::new(self.rule_set.eof_kind, eof_span));

        tracing::debug!(
            tokens = tokens.len(),
            diagnostics = diagnostics.len(),
            "scan complete"
        );
        ScanOutcome { tokens, diagnostics }
    }

    /// Scans every rule at `pos`, returning the candidate chosen by longest-match-with-priority,
    /// or `None` if no rule produces a usable (nonzero-length) match.
    ///
    /// This never stops early: every rule is tried on every iteration, which is the conservative
    /// choice when a pattern's matched length at a position can't be known without running it.
    fn best_match(&self, pos: usize) -> Option<Candidate<'a, K>> {
        let mut best: Option<Candidate<'a, K>> = None;
        for rule in self.rule_set.rules() {
            let Some(len) = rule.pattern.match_at(self.text, pos) else {
                continue;
            };
            // A zero-length match never advances the scanner, so it can never be selected; it is
            // treated as "this rule found nothing" rather than as a construction-time error.
            if len == 0 {
                continue;
            }
            let candidate = Candidate { len, rule };
            // Rules are pre-sorted by (-priority, +pattern length), so on an equal-length tie the
            // earliest-seen candidate already has the higher priority (or came first in
            // insertion order); only a strictly longer match may displace it.
            best = Some(match best {
                Some(current) if candidate.len > current.len => candidate,
                Some(current) => current,
                None => candidate,
            });
        }
        best
    }
}

struct Candidate<'a, K: Kind> {
    len: usize,
    rule: &'a crate::rule::Rule<K>,
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::*;
    use crate::rule::{Rule, RuleSet, UNTERMINATED_STRING};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum K {
        If,
        Ident,
        Ws,
        A,
        Aa,
        Letter,
        Str,
        Eof,
    }

    fn source_id() -> SourceId {
        SourceId::new(0)
    }

    #[test]
    fn keyword_beats_identifier_of_equal_length() {
        let mut set = RuleSet::new(K::Eof);
        set.add_rule(Rule {
            priority: 10,
            ..Rule::new(K::If, Regex::new("if").unwrap())
        });
        set.add_rule(Rule {
            priority: 1,
            ..Rule::new(K::Ident, Regex::new("[a-zA-Z]+").unwrap())
        });
        let outcome = Scanner::new(&set, source_id(), "if").scan_all();
        assert_eq!(outcome.tokens[0].kind, K::If);
        assert_eq!(outcome.tokens[1].kind, K::Eof);
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn longest_match_wins_regardless_of_priority() {
        let mut set = RuleSet::new(K::Eof);
        set.add_rule(Rule::new(K::A, Regex::new("a").unwrap()));
        set.add_rule(Rule::new(K::Aa, Regex::new("aa").unwrap()));
        let outcome = Scanner::new(&set, source_id(), "aa").scan_all();
        assert_eq!(outcome.tokens[0].kind, K::Aa);
        assert_eq!(outcome.tokens.len(), 2);
    }

    #[test]
    fn skip_rule_consumes_whitespace_without_emitting_tokens() {
        let mut set = RuleSet::new(K::Eof);
        set.add_rule(Rule::new(K::Ident, Regex::new("[a-zA-Z]+").unwrap()));
        set.add_rule(Rule {
            skip: true,
            ..Rule::new(K::Ws, Regex::new(r"\s+").unwrap())
        });
        let outcome = Scanner::new(&set, source_id(), "hello   world").scan_all();
        assert_eq!(outcome.tokens.len(), 3);
        assert_eq!(outcome.tokens[0].span.start, 0);
        assert_eq!(outcome.tokens[0].span.end, 5);
        assert_eq!(outcome.tokens[1].span.start, 8);
        assert_eq!(outcome.tokens[1].span.end, 13);
        assert_eq!(outcome.tokens[2].span.start, 13);
        assert_eq!(outcome.tokens[2].span.end, 13);
    }

    #[test]
    fn unrecognized_character_recovers_and_reports() {
        let mut set = RuleSet::new(K::Eof);
        set.add_rule(Rule::new(K::Letter, Regex::new("[a-zA-Z]").unwrap()));
        let outcome = Scanner::new(&set, source_id(), "a@b").scan_all();
        assert_eq!(outcome.tokens.len(), 3); // a, b, eof
        assert_eq!(outcome.diagnostics.len(), 1);
        assert_eq!(outcome.diagnostics[0].message, "unexpected character");
        assert_eq!(outcome.diagnostics[0].labels[0].message, "unexpected '@'");
    }

    #[test]
    fn error_pattern_rule_emits_diagnostic_not_token() {
        let mut set = RuleSet::new(K::Eof);
        set.add_rule(Rule::new(K::Str, Regex::new("\"[^\"]*\"").unwrap()));
        set.add_rule(Rule {
            priority: 5,
            error_handler: Some(UNTERMINATED_STRING),
            ..Rule::new(K::Str, Regex::new("\"[^\"]*$").unwrap())
        });
        let outcome = Scanner::new(&set, source_id(), "\"hello world").scan_all();
        assert_eq!(outcome.tokens.len(), 1); // just EOF
        assert_eq!(outcome.diagnostics.len(), 1);
        assert_eq!(outcome.diagnostics[0].message, "unterminated string literal");
        assert_eq!(
            outcome.diagnostics[0].help.as_deref(),
            Some("strings must be closed with a matching quote")
        );
    }

    #[test]
    fn eof_token_is_always_last_and_zero_length() {
        let set: RuleSet<K> = RuleSet::new(K::Eof);
        let outcome = Scanner::new(&set, source_id(), "").scan_all();
        assert_eq!(outcome.tokens.len(), 1);
        assert_eq!(outcome.tokens[0].kind, K::Eof);
        assert!(outcome.tokens[0].span.is_empty());
    }
}
