//! Segment splitting
//!
//! One category pass reads a segment sequence and produces a new one:
//! every plain segment is scanned for the category's matches and split
//! into plain and tagged pieces, while tagged segments pass through
//! untouched.

use super::category::Category;
use super::pattern::{collect_matches, Fault, Match, MatchBudget, Pattern};
use super::segment::Segment;

/// Split one plain run by its matches, appending the pieces to `out`
///
/// `matches` must be ordered, non-overlapping and inside `text`, as
/// produced by `collect_matches`. They are applied from last to first so
/// each match's absolute offsets stay valid while the run is carved up.
/// Empty remainders before, between or after matches are not emitted, and
/// a run with no matches is passed through as-is.
///
/// Returns the number of segments appended.
pub fn split_plain(
    text: &str,
    category: &Category,
    matches: &[Match],
    out: &mut Vec<Segment>,
) -> usize {
    if matches.is_empty() {
        out.push(Segment::plain(text));
        return 1;
    }

    // Pieces after the current cut, collected back to front
    let mut tail = Vec::with_capacity(matches.len() * 2);
    let mut remaining = text.len();

    for m in matches.iter().rev() {
        let end = m.end();
        debug_assert!(m.offset <= end && end <= remaining);
        if end < remaining {
            tail.push(Segment::plain(&text[end..remaining]));
        }
        tail.push(Segment::tagged(category.clone(), &text[m.offset..end]));
        remaining = m.offset;
    }

    let before = out.len();
    if remaining > 0 {
        out.push(Segment::plain(&text[..remaining]));
    }
    out.extend(tail.into_iter().rev());
    out.len() - before
}

/// Result of one category pass over a segment sequence
#[derive(Debug, Default)]
pub struct PassOutcome {
    /// The rewritten sequence
    pub segments: Vec<Segment>,
    /// Number of segments tagged by this pass
    pub tagged: usize,
    /// Rejected matches, in scan order
    pub faults: Vec<Fault>,
    /// Whether the budget ran out; `segments` is incomplete if so
    pub exhausted: bool,
}

/// Apply one category to every plain segment of a sequence
pub fn apply_pass(
    segments: &[Segment],
    category: &Category,
    pattern: &dyn Pattern,
    budget: &mut MatchBudget,
) -> PassOutcome {
    let mut outcome = PassOutcome {
        segments: Vec::with_capacity(segments.len()),
        ..Default::default()
    };

    for segment in segments {
        let Segment::Plain(text) = segment else {
            outcome.segments.push(segment.clone());
            continue;
        };

        let scan = collect_matches(text, pattern, budget);
        outcome.faults.extend(scan.faults);
        if scan.exhausted {
            outcome.exhausted = true;
            return outcome;
        }

        outcome.tagged += scan.matches.len();
        split_plain(text, category, &scan.matches, &mut outcome.segments);
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::pattern::PatternRule;

    fn split(text: &str, matches: &[(usize, usize)]) -> Vec<Segment> {
        let matches: Vec<Match> = matches.iter().map(|&(o, l)| Match::new(o, l)).collect();
        let mut out = Vec::new();
        let count = split_plain(text, &Category::Keyword, &matches, &mut out);
        assert_eq!(count, out.len());
        out
    }

    fn kw(text: &str) -> Segment {
        Segment::tagged(Category::Keyword, text)
    }

    fn joined(segments: &[Segment]) -> String {
        segments.iter().map(Segment::text).collect()
    }

    #[test]
    fn test_split_interleaves() {
        let out = split("if (x) return;", &[(0, 2), (7, 6)]);
        assert_eq!(
            out,
            vec![kw("if"), Segment::plain(" (x) "), kw("return"), Segment::plain(";")]
        );
    }

    #[test]
    fn test_split_whole_text() {
        assert_eq!(split("42", &[(0, 2)]), vec![kw("42")]);
    }

    #[test]
    fn test_split_no_matches() {
        assert_eq!(split("abc", &[]), vec![Segment::plain("abc")]);
        assert_eq!(split("", &[]), vec![Segment::plain("")]);
    }

    #[test]
    fn test_split_adjacent() {
        assert_eq!(split("abcdef", &[(0, 3), (3, 3)]), vec![kw("abc"), kw("def")]);
    }

    #[test]
    fn test_split_match_in_middle() {
        let out = split("a := b", &[(2, 2)]);
        assert_eq!(out, vec![Segment::plain("a "), kw(":="), Segment::plain(" b")]);
        assert_eq!(joined(&out), "a := b");
    }

    #[test]
    fn test_split_appends_after_existing() {
        let mut out = vec![Segment::plain("x")];
        let count = split_plain("ab", &Category::Number, &[Match::new(1, 1)], &mut out);
        assert_eq!(count, 2);
        assert_eq!(
            out,
            vec![
                Segment::plain("x"),
                Segment::plain("a"),
                Segment::tagged(Category::Number, "b")
            ]
        );
    }

    #[test]
    fn test_split_multibyte() {
        let text = "é if ü";
        let offset = text.find("if").unwrap();
        let out = split(text, &[(offset, 2)]);
        assert_eq!(out, vec![Segment::plain("é "), kw("if"), Segment::plain(" ü")]);
    }

    #[test]
    fn test_pass_skips_tagged_segments() {
        let rule = PatternRule::new(r"\bint\b").unwrap();
        let segments = vec![
            Segment::tagged(Category::String, "\"int\""),
            Segment::plain(" int y;"),
        ];
        let mut budget = MatchBudget::new(1000);
        let outcome = apply_pass(&segments, &Category::Type, &rule, &mut budget);

        assert!(!outcome.exhausted);
        assert_eq!(outcome.tagged, 1);
        assert_eq!(
            outcome.segments,
            vec![
                Segment::tagged(Category::String, "\"int\""),
                Segment::plain(" "),
                Segment::tagged(Category::Type, "int"),
                Segment::plain(" y;"),
            ]
        );
    }

    #[test]
    fn test_pass_reports_exhaustion() {
        let rule = PatternRule::new(r"a").unwrap();
        let segments = vec![Segment::plain("aaaa")];
        let mut budget = MatchBudget::new(2);
        let outcome = apply_pass(&segments, &Category::Keyword, &rule, &mut budget);
        assert!(outcome.exhausted);
    }
}
