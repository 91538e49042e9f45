//! Adapter over a regex engine exposing only "does this pattern match starting exactly here".

use regex::Regex;

/// A pattern that can be asked whether it matches starting at an exact byte offset.
///
/// The obvious implementation would rebuild an anchored regex (`\A(?:pattern)`) per call; instead
/// this uses [`Regex::find_at`], which lets the regex engine's own internal optimizations (e.g.
/// literal prefixes) still apply, and merely verifies after the fact that the match begins where
/// we asked.
pub trait MatchAt {
    /// Returns the length in bytes of the match starting at `pos`, or `None` if no match begins
    /// exactly there (including when `pos` is past the end of `text`).
    fn match_at(&self, text: &str, pos: usize) -> Option<usize>;
}

impl MatchAt for Regex {
    fn match_at(&self, text: &str, pos: usize) -> Option<usize> {
        if pos >= text.len() {
            return None;
        }
        let m = self.find_at(text, pos)?;
        (m.start() == pos).then(|| m.end() - m.start())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_only_at_exact_offset() {
        let re = Regex::new(r"[a-z]+").unwrap();
        assert_eq!(re.match_at("  abc", 2), Some(3));
        assert_eq!(re.match_at("  abc", 0), None, "match starts later than pos");
        assert_eq!(re.match_at("  abc", 5), None, "pos is end of string");
        assert_eq!(re.match_at("  abc", 6), None, "pos past end of string");
    }

    #[test]
    fn zero_length_match_is_reported() {
        let re = Regex::new(r"\d*").unwrap();
        assert_eq!(re.match_at("abc", 0), Some(0));
    }
}
