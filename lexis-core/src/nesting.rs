//! A stack-based validator for paired delimiters (parentheses, brackets, braces, ...).

use std::collections::HashMap;

use crate::kind::Kind;

/// Tracks nesting depth across a stream of token kinds, classifying mismatches as either "too
/// many closes" or "still open at end of input".
///
/// When `pairs` is supplied, a close that doesn't match the top of the stack is counted as an
/// extra close without touching the stack, so the rest of the stream can still be validated
/// sensibly. Without `pairs`, any open/close kind is treated as interchangeable.
pub struct NestingTracker<K: Kind> {
    open_set: Vec<K>,
    close_set: Vec<K>,
    pairs: Option<HashMap<K, K>>,
    stack: Vec<K>,
    extra_closes: usize,
}

impl<K: Kind> NestingTracker<K> {
    pub fn new(open_set: Vec<K>, close_set: Vec<K>) -> Self {
        Self {
            open_set,
            close_set,
            pairs: None,
            stack: Vec::new(),
            extra_closes: 0,
        }
    }

    /// Adds strict open/close pairing: a close only matches if the stack's top is its paired
    /// open kind.
    pub fn with_pairs(mut self, pairs: HashMap<K, K>) -> Self {
        self.pairs = Some(pairs);
        self
    }

    pub fn level(&self) -> usize {
        self.stack.len()
    }

    fn is_open(&self, kind: K) -> bool {
        self.open_set.contains(&kind)
    }

    fn is_close(&self, kind: K) -> bool {
        self.close_set.contains(&kind)
    }

    /// Feeds one token kind, returning the nesting level to display it at (the level *before*
    /// an open increments, or *after* a close decrements).
    pub fn process(&mut self, kind: K) -> usize {
        if self.is_open(kind) {
            let level = self.level();
            self.stack.push(kind);
            level
        } else if self.is_close(kind) {
            let matches = match &self.pairs {
                Some(pairs) => pairs
                    .get(&kind)
                    .is_some_and(|open| self.stack.last() == Some(open)),
                None => !self.stack.is_empty(),
            };
            if matches {
                self.stack.pop();
            } else {
                self.extra_closes += 1;
            }
            self.level()
        } else {
            self.level()
        }
    }

    pub fn balanced(&self) -> bool {
        self.stack.is_empty() && self.extra_closes == 0
    }

    pub fn reset(&mut self) {
        self.stack.clear();
        self.extra_closes = 0;
    }

    /// Describes why the tracked sequence isn't balanced, or `None` if it is.
    pub fn validation_error(&self) -> Option<String>
    where
        K: std::fmt::Debug,
    {
        if self.balanced() {
            return None;
        }
        if self.extra_closes > 0 && self.stack.is_empty() {
            return Some(format!("Too many closing tokens ({} extra)", self.extra_closes));
        }
        if self.extra_closes == 0 && !self.stack.is_empty() {
            let names = self
                .stack
                .iter()
                .map(|kind| format!("{kind:?}"))
                .collect::<Vec<_>>()
                .join(", ");
            return Some(format!("Unclosed tokens: {names}"));
        }
        let names = self
            .stack
            .iter()
            .map(|kind| format!("{kind:?}"))
            .collect::<Vec<_>>()
            .join(", ");
        Some(format!("Mismatched tokens in stack: {names}"))
    }
}
