//! Pattern matching for syntax categories
//!
//! A `Pattern` reports the next match at or after a scan position. The
//! scan in `collect_matches` drives it across one plain run, checking
//! every reported match before it is allowed anywhere near the text.

use regex::{Regex, RegexBuilder};
use tracing::trace;

use crate::error::FaultKind;

/// A match reported by a pattern, in byte offsets relative to the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Byte offset where the match starts
    pub offset: usize,
    /// Length of the match in bytes
    pub len: usize,
}

impl Match {
    /// Create a new match
    pub fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Byte offset just past the match (saturating on overflow)
    pub fn end(&self) -> usize {
        self.offset.saturating_add(self.len)
    }
}

/// A text-matching rule for one category
///
/// Implementations must be shareable across threads: the pattern table
/// is read-only once built and may back concurrent region processing.
pub trait Pattern: Send + Sync {
    /// Find the first match starting at or after `start`
    fn find_at(&self, text: &str, start: usize) -> Option<Match>;
}

/// A pattern backed by a compiled regular expression
#[derive(Debug, Clone)]
pub struct PatternRule {
    regex: Regex,
}

impl PatternRule {
    /// Compile a pattern rule with default flags
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Self::with_flags(pattern, false, false)
    }

    /// Compile a pattern rule with case-insensitive and/or dot-all matching
    pub fn with_flags(
        pattern: &str,
        case_insensitive: bool,
        dot_matches_newline: bool,
    ) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(case_insensitive)
            .dot_matches_new_line(dot_matches_newline)
            .build()?;
        Ok(Self { regex })
    }
}

impl Pattern for PatternRule {
    fn find_at(&self, text: &str, start: usize) -> Option<Match> {
        if start > text.len() {
            return None;
        }
        // find_at (rather than slicing) keeps \b and ^ anchored to the real context
        self.regex
            .find_at(text, start)
            .map(|m| Match::new(m.start(), m.len()))
    }
}

/// Ceiling on the number of pattern calls allowed in one category pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchBudget {
    limit: usize,
    remaining: usize,
}

impl MatchBudget {
    /// Create a budget allowing `limit` calls
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            remaining: limit,
        }
    }

    /// Consume one call; returns false once the budget is spent
    pub fn take(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }

    /// The configured ceiling
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Calls still available
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

/// A rejected match and the reason it was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fault {
    /// Offset the pattern reported
    pub offset: usize,
    /// What was wrong with it
    pub kind: FaultKind,
}

/// Result of scanning one plain run
#[derive(Debug, Default)]
pub struct Scan {
    /// Accepted matches, strictly ordered and non-overlapping
    pub matches: Vec<Match>,
    /// Matches that were rejected and skipped
    pub faults: Vec<Fault>,
    /// Whether the budget ran out before the scan finished
    pub exhausted: bool,
}

/// Collect every match of `pattern` in `text`, left to right
///
/// Each iteration either accepts a match and resumes at its end, or
/// resumes one character past a position already reached, so the scan
/// terminates after at most `text.len() + 1` calls regardless of what the
/// pattern reports. Zero-width matches are dropped.
pub fn collect_matches(text: &str, pattern: &dyn Pattern, budget: &mut MatchBudget) -> Scan {
    let mut scan = Scan::default();
    let mut pos = 0;

    while pos <= text.len() {
        if !budget.take() {
            scan.exhausted = true;
            break;
        }

        let Some(m) = pattern.find_at(text, pos) else {
            break;
        };

        if let Err(kind) = validate(text, pos, m) {
            trace!(offset = m.offset, len = m.len, %kind, "rejected match");
            scan.faults.push(Fault {
                offset: m.offset,
                kind,
            });
            pos = next_char(text, pos);
            continue;
        }

        if m.len == 0 {
            pos = next_char(text, m.offset);
            continue;
        }

        scan.matches.push(m);
        pos = m.end();
    }

    scan
}

/// Check a reported match against the run and the resume position
fn validate(text: &str, pos: usize, m: Match) -> Result<(), FaultKind> {
    if m.offset < pos {
        return Err(FaultKind::NonAdvancing);
    }
    let end = m.offset.checked_add(m.len).ok_or(FaultKind::OutOfBounds)?;
    if end > text.len() {
        return Err(FaultKind::OutOfBounds);
    }
    if !text.is_char_boundary(m.offset) || !text.is_char_boundary(end) {
        return Err(FaultKind::SplitsCharacter);
    }
    Ok(())
}

/// Byte offset of the character after `pos`, or past the end
fn next_char(text: &str, pos: usize) -> usize {
    text.get(pos..)
        .and_then(|rest| rest.chars().next())
        .map_or(text.len() + 1, |c| pos + c.len_utf8())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reports the same fixed match no matter where the scan is
    struct Stuck(Match);

    impl Pattern for Stuck {
        fn find_at(&self, _text: &str, _start: usize) -> Option<Match> {
            Some(self.0)
        }
    }

    /// Reports an empty match at every position
    struct Empty;

    impl Pattern for Empty {
        fn find_at(&self, _text: &str, start: usize) -> Option<Match> {
            Some(Match::new(start, 0))
        }
    }

    fn scan(text: &str, pattern: &dyn Pattern) -> Scan {
        collect_matches(text, pattern, &mut MatchBudget::new(10_000))
    }

    #[test]
    fn test_pattern_rule() {
        let rule = PatternRule::new(r"\d+").unwrap();
        assert_eq!(rule.find_at("abc 123 def", 0), Some(Match::new(4, 3)));
        assert_eq!(rule.find_at("abc 123 def", 5), Some(Match::new(5, 2)));
        assert_eq!(rule.find_at("no numbers", 0), None);
        assert_eq!(rule.find_at("abc", 4), None);
    }

    #[test]
    fn test_find_at_keeps_word_boundary_context() {
        let rule = PatternRule::new(r"\bif\b").unwrap();
        // Resuming inside "elif" must not see a word start at "if"
        assert_eq!(rule.find_at("elif", 2), None);
    }

    #[test]
    fn test_case_insensitive_flag() {
        let rule = PatternRule::with_flags(r"\bbegin\b", true, false).unwrap();
        assert_eq!(rule.find_at("BEGIN", 0), Some(Match::new(0, 5)));
    }

    #[test]
    fn test_collect_all_matches() {
        let rule = PatternRule::new(r"\b(if|return)\b").unwrap();
        let scan = scan("if (x) return;", &rule);
        assert_eq!(scan.matches, vec![Match::new(0, 2), Match::new(7, 6)]);
        assert!(scan.faults.is_empty());
        assert!(!scan.exhausted);
    }

    #[test]
    fn test_collect_back_to_back() {
        let rule = PatternRule::new(r"abc").unwrap();
        let scan = scan("abcabc", &rule);
        assert_eq!(scan.matches, vec![Match::new(0, 3), Match::new(3, 3)]);
    }

    #[test]
    fn test_empty_text() {
        let rule = PatternRule::new(r"\d+").unwrap();
        let scan = scan("", &rule);
        assert!(scan.matches.is_empty());
        assert!(scan.faults.is_empty());
    }

    #[test]
    fn test_zero_width_matches_terminate() {
        let scan = scan("héllo", &Empty);
        assert!(scan.matches.is_empty());
        assert!(scan.faults.is_empty());
        assert!(!scan.exhausted);

        let rule = PatternRule::new(r"x*").unwrap();
        let scan = collect_matches("abxxc", &rule, &mut MatchBudget::new(100));
        assert_eq!(scan.matches, vec![Match::new(2, 2)]);
    }

    #[test]
    fn test_non_advancing_match_is_a_fault() {
        let scan = scan("abcdef", &Stuck(Match::new(0, 2)));
        // Accepted once, then rejected at every later position
        assert_eq!(scan.matches, vec![Match::new(0, 2)]);
        assert!(!scan.faults.is_empty());
        assert!(scan
            .faults
            .iter()
            .all(|f| f.kind == FaultKind::NonAdvancing));
        assert!(!scan.exhausted);
    }

    #[test]
    fn test_out_of_bounds_match_is_a_fault() {
        let scan = scan("abc", &Stuck(Match::new(1, 10)));
        assert!(scan.matches.is_empty());
        assert_eq!(scan.faults[0].kind, FaultKind::OutOfBounds);

        let scan = collect_matches(
            "abc",
            &Stuck(Match::new(1, usize::MAX)),
            &mut MatchBudget::new(100),
        );
        assert!(scan.matches.is_empty());
        assert_eq!(scan.faults[0].kind, FaultKind::OutOfBounds);
    }

    #[test]
    fn test_split_character_is_a_fault() {
        // 'é' is two bytes; a match ending at byte 1 splits it
        let scan = scan("é", &Stuck(Match::new(0, 1)));
        assert!(scan.matches.is_empty());
        assert_eq!(scan.faults[0].kind, FaultKind::SplitsCharacter);
    }

    #[test]
    fn test_budget_exhaustion() {
        let rule = PatternRule::new(r"a").unwrap();
        let mut budget = MatchBudget::new(3);
        let scan = collect_matches("aaaaaa", &rule, &mut budget);
        assert!(scan.exhausted);
        assert_eq!(scan.matches.len(), 3);
        assert_eq!(budget.remaining(), 0);
        assert_eq!(budget.limit(), 3);
    }
}
