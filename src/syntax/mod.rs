//! Syntax annotation
//!
//! This module splits region text into plain and category-tagged
//! segments using per-language tables of regular expressions:
//! - `pattern`: matcher contract and bounded match collection
//! - `annotate`: splitting plain runs by their matches
//! - `highlighter`: applying a language's categories to regions

mod annotate;
mod builtin;
mod category;
mod highlighter;
mod language;
mod pattern;
mod registry;
mod segment;
mod style;

pub use annotate::{apply_pass, split_plain, PassOutcome};
pub use category::Category;
pub use highlighter::{
    HighlightReport, HighlightStatus, Highlighter, DEFAULT_LANGUAGE, DEFAULT_MATCH_BUDGET,
};
pub use language::{CategoryRule, LanguageDefinition};
pub use pattern::{collect_matches, Fault, Match, MatchBudget, Pattern, PatternRule, Scan};
pub use registry::{parse_languages, LanguageRegistry};
pub use segment::{Region, Segment};
pub use style::{Color, Style};
